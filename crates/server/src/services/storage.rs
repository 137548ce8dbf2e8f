//! Disk-backed file storage for uploaded images and resource files.
//!
//! Files land in the configured upload directory under a UUID filename and
//! are served back by `tower_http::services::ServeDir` at `/uploads/…`.
//! Size and content-type limits are enforced before anything touches disk.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted image upload, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum accepted resource-file upload, in bytes (50 MiB).
pub const MAX_RESOURCE_BYTES: usize = 50 * 1024 * 1024;

/// Content types accepted for image uploads.
const IMAGE_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/avif",
];

/// Errors from upload handling.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The upload exceeds the size limit for its kind.
    #[error("file exceeds the {limit_bytes}-byte limit")]
    TooLarge {
        /// The limit that was exceeded.
        limit_bytes: usize,
    },

    /// The content type is not accepted for this upload kind.
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),

    /// The filename is empty or attempts path traversal.
    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    /// Filesystem error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What is being uploaded; determines limits and accepted types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Product/gallery/banner imagery: 5 MiB, image/* only.
    Image,
    /// Catalogs, manuals, certificates: 50 MiB, any type.
    Resource,
}

impl UploadKind {
    /// Size limit for this kind, in bytes.
    #[must_use]
    pub const fn limit_bytes(self) -> usize {
        match self {
            Self::Image => MAX_IMAGE_BYTES,
            Self::Resource => MAX_RESOURCE_BYTES,
        }
    }
}

/// A stored upload, as reported back to the admin client.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredFile {
    /// Generated filename on disk.
    pub filename: String,
    /// Public URL path (`/uploads/{filename}`).
    pub url: String,
    /// Stored size in bytes.
    pub size_bytes: usize,
}

/// Validate an upload before writing it.
///
/// Pure so the limits are testable without a filesystem.
///
/// # Errors
///
/// Returns `TooLarge` or `UnsupportedType` on limit violations.
pub fn validate_upload(
    kind: UploadKind,
    content_type: &str,
    size_bytes: usize,
) -> Result<(), StorageError> {
    if kind == UploadKind::Image && !IMAGE_CONTENT_TYPES.contains(&content_type) {
        return Err(StorageError::UnsupportedType(content_type.to_string()));
    }

    if size_bytes > kind.limit_bytes() {
        return Err(StorageError::TooLarge {
            limit_bytes: kind.limit_bytes(),
        });
    }

    Ok(())
}

/// Check a client-supplied filename is a plain name, not a path.
///
/// # Errors
///
/// Returns `InvalidFilename` for empty names, path separators, or `..`.
pub fn sanitize_filename(name: &str) -> Result<&str, StorageError> {
    if name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.starts_with('.')
    {
        return Err(StorageError::InvalidFilename(name.to_string()));
    }
    Ok(name)
}

/// File extension to store for an original filename, if it has a usable one.
fn extension_of(original_name: &str) -> Option<&str> {
    let ext = Path::new(original_name).extension()?.to_str()?;
    // An attacker-controlled extension still ends up in URLs; keep it tame.
    if ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext)
    } else {
        None
    }
}

/// Disk-backed storage rooted at the configured upload directory.
#[derive(Debug, Clone)]
pub struct StorageService {
    root: PathBuf,
}

impl StorageService {
    /// Create a storage service rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory uploads are written to (for `ServeDir`).
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if creation fails.
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Validate and persist an upload, returning its public location.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any I/O, or `StorageError::Io` if
    /// the write fails.
    pub async fn save(
        &self,
        kind: UploadKind,
        original_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, StorageError> {
        validate_upload(kind, content_type, bytes.len())?;

        let filename = match extension_of(original_name) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_ascii_lowercase()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::write(self.root.join(&filename), bytes).await?;

        Ok(StoredFile {
            url: format!("/uploads/{filename}"),
            size_bytes: bytes.len(),
            filename,
        })
    }

    /// Delete a stored file by its generated filename.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilename` for path-traversal attempts and
    /// `StorageError::Io` if the unlink fails (including not-found).
    pub async fn delete(&self, filename: &str) -> Result<(), StorageError> {
        let filename = sanitize_filename(filename)?;
        tokio::fs::remove_file(self.root.join(filename)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size_limit_is_enforced() {
        assert!(validate_upload(UploadKind::Image, "image/png", MAX_IMAGE_BYTES).is_ok());
        assert!(matches!(
            validate_upload(UploadKind::Image, "image/png", MAX_IMAGE_BYTES + 1),
            Err(StorageError::TooLarge {
                limit_bytes: MAX_IMAGE_BYTES
            })
        ));
    }

    #[test]
    fn resource_size_limit_is_enforced() {
        assert!(validate_upload(UploadKind::Resource, "application/pdf", MAX_RESOURCE_BYTES).is_ok());
        assert!(matches!(
            validate_upload(UploadKind::Resource, "application/pdf", MAX_RESOURCE_BYTES + 1),
            Err(StorageError::TooLarge {
                limit_bytes: MAX_RESOURCE_BYTES
            })
        ));
    }

    #[test]
    fn images_must_be_images() {
        assert!(matches!(
            validate_upload(UploadKind::Image, "application/pdf", 100),
            Err(StorageError::UnsupportedType(_))
        ));
        // Resources are not type-restricted
        assert!(validate_upload(UploadKind::Resource, "application/zip", 100).is_ok());
    }

    #[test]
    fn traversal_filenames_are_rejected() {
        for name in ["", "../etc/passwd", "a/b.png", "a\\b.png", ".hidden", "a..b"] {
            assert!(
                matches!(sanitize_filename(name), Err(StorageError::InvalidFilename(_))),
                "should reject {name:?}"
            );
        }
        assert!(sanitize_filename("3f2a.png").is_ok());
    }

    #[test]
    fn extensions_are_kept_only_when_tame() {
        assert_eq!(extension_of("photo.JPG"), Some("JPG"));
        assert_eq!(extension_of("no-extension"), None);
        assert_eq!(extension_of("weird.ex%t"), None);
        assert_eq!(extension_of("long.extension-name"), None);
    }
}
