//! Client-side checks for the optional supporting document.

use thiserror::Error;

/// 5 MiB
pub const MAX_ATTACHMENT_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

pub const ALLOWED_MIME_TYPES: [&str; 4] = ["application/pdf", "image/jpeg", "image/png", "image/jpg"];

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.jpg,.jpeg,.png";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttachmentError {
    #[error("Solo se permiten archivos PDF, JPG, JPEG o PNG")]
    UnsupportedType(String),
    #[error("El tamaño máximo permitido es 5MB")]
    TooLarge(f64),
}

/// Validates the browser-reported MIME type and size (bytes) of a selected file.
pub fn validate_attachment(mime: &str, size: f64) -> Result<(), AttachmentError> {
    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Err(AttachmentError::UnsupportedType(mime.to_string()));
    }
    if size > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentError::TooLarge(size));
    }
    Ok(())
}

/// Human readable file size for the selected-file chip.
pub fn format_file_size(size: f64) -> String {
    if size < 1024.0 {
        format!("{} B", size as u64)
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_types_up_to_limit() {
        assert!(validate_attachment("application/pdf", 1024.0).is_ok());
        assert!(validate_attachment("image/png", MAX_ATTACHMENT_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let err = validate_attachment("application/zip", 10.0).unwrap_err();
        assert_eq!(err.to_string(), "Solo se permiten archivos PDF, JPG, JPEG o PNG");
        // an empty type (unknown extension) is rejected too
        assert!(validate_attachment("", 10.0).is_err());
    }

    #[test]
    fn test_rejects_oversized_files() {
        let err = validate_attachment("image/jpeg", MAX_ATTACHMENT_BYTES + 1.0).unwrap_err();
        assert_eq!(err.to_string(), "El tamaño máximo permitido es 5MB");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512.0), "512 B");
        assert_eq!(format_file_size(2048.0), "2.0 KB");
        assert_eq!(format_file_size(3.5 * 1024.0 * 1024.0), "3.5 MB");
    }
}
