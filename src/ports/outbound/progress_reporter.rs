/// ProgressReporter port for reporting progress during operations
///
/// Status lines and warnings go to the user (stderr) while sheets load,
/// keeping stdout free for the rendered catalog.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a counter
    ///
    /// # Arguments
    /// * `current` - Sheets finished so far
    /// * `total` - Sheets requested
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
