use colored::Colorize;
use std::io::Write;

/// The sink for every user-facing message of a run.
///
/// Diagnostics go through `tracing`; this is only for what the person at the
/// terminal is meant to read.
pub trait Console {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Writes a question without a trailing newline.
    fn prompt(&self, message: &str);

    /// A framed block of text, e.g. the welcome banner.
    fn panel(&self, title: &str, body: &str) {
        if !title.is_empty() {
            self.info(title);
        }
        self.info(body);
    }
}

/// Styled output on stderr, leaving stdout free.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, text: &str, newline: bool) {
        let mut stderr = std::io::stderr().lock();
        // A closed terminal is not worth aborting the run over.
        let _ = if newline {
            writeln!(stderr, "{}", text)
        } else {
            write!(stderr, "{}", text).and_then(|_| stderr.flush())
        };
    }
}

impl Console for TermConsole {
    fn info(&self, message: &str) {
        self.emit(message, true);
    }

    fn warn(&self, message: &str) {
        self.emit(&format!("{}  {}", "⚠".yellow(), message.dimmed()), true);
    }

    fn error(&self, message: &str) {
        self.emit(&format!("{} {}", "✗".bold().red(), message.red()), true);
    }

    fn prompt(&self, message: &str) {
        self.emit(&format!("{} ", message.bright_cyan()), false);
    }

    fn panel(&self, title: &str, body: &str) {
        let width = body
            .lines()
            .chain(std::iter::once(title))
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            + 4;

        let top = if title.is_empty() {
            "─".repeat(width)
        } else {
            let fill = width.saturating_sub(title.chars().count() + 2);
            format!("{} {} {}", "─".repeat(fill / 2), title.bold(), "─".repeat(fill - fill / 2))
        };

        self.emit(&format!("╭{}╮", top).bright_cyan().to_string(), true);
        for line in body.lines() {
            let pad = width - line.chars().count();
            let row = format!(
                "{}{}{}{}{}",
                "│".bright_cyan(),
                " ".repeat(pad / 2),
                line.bright_white(),
                " ".repeat(pad - pad / 2),
                "│".bright_cyan()
            );
            self.emit(&row, true);
        }
        self.emit(&format!("╰{}╯", "─".repeat(width)).bright_cyan().to_string(), true);
    }
}
