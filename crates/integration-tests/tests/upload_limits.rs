//! File upload limit enforcement.

use maru_server::services::storage::{
    MAX_IMAGE_BYTES, MAX_RESOURCE_BYTES, StorageError, UploadKind, sanitize_filename,
    validate_upload,
};

#[test]
fn image_over_five_mib_is_rejected() {
    assert!(matches!(
        validate_upload(UploadKind::Image, "image/jpeg", MAX_IMAGE_BYTES + 1),
        Err(StorageError::TooLarge {
            limit_bytes: MAX_IMAGE_BYTES
        })
    ));
}

#[test]
fn image_at_exactly_five_mib_is_accepted() {
    assert!(validate_upload(UploadKind::Image, "image/jpeg", MAX_IMAGE_BYTES).is_ok());
}

#[test]
fn resource_over_fifty_mib_is_rejected() {
    assert!(matches!(
        validate_upload(UploadKind::Resource, "application/pdf", MAX_RESOURCE_BYTES + 1),
        Err(StorageError::TooLarge {
            limit_bytes: MAX_RESOURCE_BYTES
        })
    ));
}

#[test]
fn non_image_content_types_are_rejected_for_images() {
    for content_type in ["application/pdf", "text/html", "video/mp4", ""] {
        assert!(
            matches!(
                validate_upload(UploadKind::Image, content_type, 1024),
                Err(StorageError::UnsupportedType(_))
            ),
            "should reject {content_type:?}"
        );
    }
}

#[test]
fn resources_accept_arbitrary_content_types() {
    for content_type in ["application/pdf", "application/zip", "application/octet-stream"] {
        assert!(validate_upload(UploadKind::Resource, content_type, 1024).is_ok());
    }
}

#[test]
fn type_check_runs_before_size_check() {
    // An oversized non-image reports the type problem, not the size
    assert!(matches!(
        validate_upload(UploadKind::Image, "application/pdf", MAX_IMAGE_BYTES + 1),
        Err(StorageError::UnsupportedType(_))
    ));
}

#[test]
fn delete_rejects_path_traversal() {
    for name in ["../../etc/passwd", "..", "uploads/../secret", "a\\b"] {
        assert!(
            matches!(
                sanitize_filename(name),
                Err(StorageError::InvalidFilename(_))
            ),
            "should reject {name:?}"
        );
    }
}

#[test]
fn delete_accepts_generated_names() {
    assert!(sanitize_filename("550e8400-e29b-41d4-a716-446655440000.png").is_ok());
}
