//! Writing variants to plain-text files.

use copydesk_core::{ContentType, Variant};
use copydesk_error::{CopydeskResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Write a variant to `<dir>/<content_type_slug>_<index>.txt`.
///
/// The directory is created if needed and an existing file is replaced.
/// Returns the path written.
///
/// # Examples
///
/// ```
/// use copydesk_core::{ContentType, Variant};
/// use copydesk_studio::export_variant;
///
/// let dir = std::env::temp_dir().join("copydesk-doc-export");
/// let path = export_variant(&dir, ContentType::LinkedInPost, &Variant::new(1, "Hello"))
///     .unwrap();
/// assert!(path.ends_with("linkedin_post_1.txt"));
/// ```
#[instrument(skip(dir, variant), fields(dir = %dir.as_ref().display(), variant = variant.index))]
pub fn export_variant(
    dir: impl AsRef<Path>,
    content_type: ContentType,
    variant: &Variant,
) -> CopydeskResult<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let path = dir.join(variant.export_file_name(content_type));
    std::fs::write(&path, variant.text.as_bytes()).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    info!(path = %path.display(), "Exported variant");
    Ok(path)
}
