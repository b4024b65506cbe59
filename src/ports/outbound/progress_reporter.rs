/// ProgressReporter port for reporting progress during an analysis
///
/// This port abstracts user-facing progress output (e.g., to stderr)
/// so the orchestrator never writes to the terminal directly.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports which attempt is running out of the attempt budget
    ///
    /// # Arguments
    /// * `attempt` - Current attempt, starting at 1
    /// * `max_attempts` - Attempt budget
    /// * `message` - Optional message to include
    fn report_attempt(&self, attempt: u32, max_attempts: u32, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
