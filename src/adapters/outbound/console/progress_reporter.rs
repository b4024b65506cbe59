use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const ATTEMPT_TEMPLATE: &str = "   {spinner:.green} attempt {pos}/{len} - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so progress never mixes with a report printed to stdout.
/// Attempts are shown on an indicatif spinner that is cleared once the
/// analysis finishes or fails.
pub struct StderrProgressReporter {
    attempt_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            attempt_bar: RefCell::new(None),
        }
    }

    fn get_or_create_attempt_bar(&self, max_attempts: u32) -> ProgressBar {
        let mut bar_option = self.attempt_bar.borrow_mut();
        if let Some(bar) = bar_option.as_ref() {
            bar.clone()
        } else {
            let bar = ProgressBar::new(u64::from(max_attempts));
            let style = ProgressStyle::default_spinner()
                .template(ATTEMPT_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            bar.set_style(style);
            bar.enable_steady_tick(Duration::from_millis(120));
            *bar_option = Some(bar.clone());
            bar
        }
    }

    fn clear_attempt_bar(&self) {
        if let Some(bar) = self.attempt_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_attempt(&self, attempt: u32, max_attempts: u32, message: Option<&str>) {
        let bar = self.get_or_create_attempt_bar(max_attempts);
        bar.set_position(u64::from(attempt));
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_attempt_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_attempt_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
