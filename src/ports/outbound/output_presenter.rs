use crate::shared::Result;

/// OutputPresenter port for delivering a rendered comparison report
///
/// Stdout and file destinations implement this; the use case never knows
/// which one it is writing to.
pub trait OutputPresenter {
    /// Writes the rendered report
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, e.g. a
    /// missing parent directory or a symlinked target file.
    fn present(&self, content: &str) -> Result<()>;
}
