use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a local sheet export or config file (20 MB)
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "sheet export", "config file")
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| CatalogError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular file to a string after the symlink and size checks
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    fs::read_to_string(path).map_err(|e| {
        CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Rejects path separators and URL control characters in a value that will be
/// spliced into a URL path or a file name.
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    if component.trim().is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!(
            "Security: {} contains URL-unsafe characters",
            component_type
        );
    }

    Ok(())
}

/// Checks a value that will be percent-encoded into one URL path segment
///
/// Encoding covers separators and URL control characters; only empty
/// values and `..` are refused.
pub fn validate_url_segment(segment: &str, segment_type: &str) -> Result<()> {
    if segment.trim().is_empty() {
        anyhow::bail!("{} must not be empty", segment_type);
    }

    if segment.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            segment_type
        );
    }

    Ok(())
}
