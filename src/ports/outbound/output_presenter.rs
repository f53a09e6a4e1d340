use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered catalog is presented.
pub trait OutputPresenter {
    /// Presents the formatted catalog to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The target path is rejected (symlink, missing parent directory)
    fn present(&self, content: &str) -> Result<()>;
}
