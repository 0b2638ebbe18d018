//! Escaping rules for the HTML report.
//!
//! Table cells and the description map embedded in the report's script need
//! different treatment, so each context gets its own function.

/// Escapes text for an HTML table cell. Only angle brackets are rewritten;
/// ampersands and quotes pass through unchanged.
pub fn escape_html_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Escapes text for the inside of a JavaScript template literal.
///
/// Backslashes are doubled first so the escapes introduced for backticks and
/// `${` are not doubled again. Carriage returns become `\r`, since a template
/// literal would otherwise normalize them to `\n`. Finally every `</`, `<!--`
/// and `<script` (any case) gets a backslash after the `<`, so the text can
/// neither close the surrounding `<script>` element nor switch the HTML
/// tokenizer into its escaped script states. Inside a template literal `\/`,
/// `\!` and `\s` evaluate to the plain character.
pub fn escape_js_template(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\r', "\\r")
        .replace('`', "\\`")
        .replace("${", "\\${");
    neutralize_script_markup(&escaped)
}

/// Inserts `\` after each `<` that starts `/`, `!--` or `script`.
fn neutralize_script_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, c) in text.char_indices() {
        out.push(c);
        if c != '<' {
            continue;
        }
        let rest = &text[idx + 1..];
        let opens_script = rest
            .get(..6)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("script"));
        if rest.starts_with('/') || rest.starts_with("!--") || opens_script {
            out.push('\\');
        }
    }
    out
}
