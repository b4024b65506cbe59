use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report
///
/// Implementations decide where the report goes (stdout or a file);
/// the CLI picks one from the `--output` flag.
pub trait OutputPresenter {
    /// Writes the rendered report to its destination
    ///
    /// # Errors
    /// Returns an error when the destination cannot be written, for example
    /// a missing parent directory or an output path that is a symlink.
    fn present(&self, content: &str) -> Result<()>;
}
