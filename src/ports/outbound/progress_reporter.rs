/// ProgressReporter port for user-facing status messages
///
/// Diagnostics go through `tracing`; this port carries only the short
/// messages a user running the CLI should see.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
