use crate::config::PromptDefaults;
use crate::console::Console;
use crate::{JobScoutError, Platform, Result, SearchParams, MAX_RESULTS, MIN_RESULTS};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::debug;

/// Answers collected from one interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInputs {
    pub params: SearchParams,
    pub output_dir: PathBuf,
}

/// Turns the raw answer to "how many jobs" into an effective count.
///
/// Returns the count and, when the answer was not usable as-is, the warning
/// to show. Out-of-range and non-numeric answers fall back to [`MAX_RESULTS`].
pub fn parse_result_count(raw: &str) -> (u32, Option<String>) {
    match raw.trim().parse::<i64>() {
        Ok(n) if (MIN_RESULTS as i64..=MAX_RESULTS as i64).contains(&n) => (n as u32, None),
        Ok(_) => (
            MAX_RESULTS,
            Some(format!("Using maximum of {} entries", MAX_RESULTS)),
        ),
        Err(_) => (
            MAX_RESULTS,
            Some(format!("Invalid number. Using {}", MAX_RESULTS)),
        ),
    }
}

/// The `Prompter` asks questions on a console and reads answers from `input`.
pub struct Prompter<'a, R> {
    input: R,
    console: &'a dyn Console,
}

impl<'a, R: BufRead> Prompter<'a, R> {
    /// Creates a new `Prompter`.
    ///
    /// # Arguments
    ///
    /// * `input` - Where answers are read from, one per line.
    /// * `console` - Where questions, warnings and errors are written.
    ///
    /// # Returns
    ///
    /// A new instance of `Prompter`.
    pub fn new(input: R, console: &'a dyn Console) -> Self {
        Self { input, console }
    }

    /// Asks one question and returns the trimmed answer, or `default` when the
    /// answer is empty or input has ended.
    ///
    /// # Arguments
    ///
    /// * `question` - The text shown before the default.
    /// * `default` - The answer used for an empty line.
    ///
    /// # Returns
    ///
    /// A `Result` containing the answer, or an error if input could not be read.
    pub fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        self.console.prompt(&format!("{} ({}):", question, default));

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| JobScoutError::InputError(e.to_string()))?;

        if read == 0 {
            // Keep the terminal tidy when stdin is closed mid-prompt.
            self.console.info("");
        }

        let answer = line.trim();
        if answer.is_empty() {
            debug!(question, default, "using default answer");
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Asks until the answer is a non-negative integer.
    pub fn ask_integer(&mut self, question: &str, default: u32) -> Result<u32> {
        loop {
            let answer = self.ask(question, &default.to_string())?;
            match answer.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.console.error("Please enter a valid integer number"),
            }
        }
    }

    /// Asks for platforms. An unknown name is reported and ends collection.
    pub fn ask_platforms(&mut self, default: &str) -> Result<Vec<Platform>> {
        self.console
            .info(&format!("Available platforms: {}\n", Platform::listing()));

        let answer = self.ask("🖥️  Select platforms (comma-separated)", default)?;
        Platform::parse_list(&answer).inspect_err(|err| {
            if let JobScoutError::InvalidPlatform(name) = err {
                self.console.error(&format!("Invalid platform: {}", name));
            }
        })
    }

    /// Asks for the result count, warning about and replacing unusable answers.
    pub fn ask_result_count(&mut self, default: &str) -> Result<u32> {
        let answer = self.ask(&format!("📊 Number of jobs (max {})", MAX_RESULTS), default)?;
        let (count, warning) = parse_result_count(&answer);
        if let Some(warning) = warning {
            self.console.warn(&warning);
        }
        Ok(count)
    }

    /// Runs the whole questionnaire.
    ///
    /// # Arguments
    ///
    /// * `defaults` - The default answer for each question.
    ///
    /// # Returns
    ///
    /// A `Result` containing the collected `UserInputs`, or an error if a platform
    /// name is invalid or input could not be read.
    pub fn collect(&mut self, defaults: &PromptDefaults) -> Result<UserInputs> {
        let platforms = self.ask_platforms(&defaults.platforms)?;
        let search_term = self.ask("🔍 Search query", &defaults.search_term)?;
        let results_wanted = self.ask_result_count(&defaults.results_wanted)?;
        let hours_old = self.ask_integer("⏰ Results age (hours)", defaults.hours_old)?;
        let location = self.ask("🌍 Country", &defaults.country)?;
        let output_dir = self.ask("📁 Output directory", &defaults.output_dir)?;

        Ok(UserInputs {
            params: SearchParams {
                platforms,
                search_term,
                results_wanted,
                hours_old,
                location,
            },
            output_dir: PathBuf::from(output_dir),
        })
    }
}
