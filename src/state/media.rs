//! Attachment model and upload validation.
//!
//! The screen owns at most one attachment: the built-in default process
//! illustration or a user-supplied replacement encoded as an inline data URI.
//! Candidate files are validated before any encoding work happens.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Local};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Size ceiling for uploaded images.
///
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// File name of the built-in default illustration.
///
pub const DEFAULT_IMAGE_NAME: &str = "vendor_update_process_ghibli_style.jpg";

/// Reasons a candidate upload is rejected. The display strings double as the
/// user-visible message shown next to the upload control.
///
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// File is not a recognized image type
    #[error("Please select a valid image file.")]
    UnsupportedType,

    /// File exceeds the size ceiling
    #[error("Image must be 5 MiB or smaller.")]
    TooLarge,

    /// File could not be read from disk
    #[error("Failed to read image {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the current attachment's pixels come from.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// The built-in default illustration, referenced by name only.
    Default,
    /// A user upload, encoded as a self-contained `data:` URI.
    Encoded(String),
}

/// The current image attachment. Replaced as a unit, never partially mutated.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub source: AttachmentSource,
    pub display_name: String,
    pub path: Option<PathBuf>,
    pub uploaded_at: Option<DateTime<Local>>,
}

impl Attachment {
    /// Return the built-in default attachment.
    ///
    pub fn default_image() -> Self {
        Attachment {
            source: AttachmentSource::Default,
            display_name: DEFAULT_IMAGE_NAME.to_string(),
            path: None,
            uploaded_at: None,
        }
    }

    /// Whether the attachment is a user upload rather than the default.
    ///
    pub fn is_custom(&self) -> bool {
        self.source != AttachmentSource::Default
    }

    /// Name shown in the attachment panel and the preview modal.
    ///
    pub fn displayed_name(&self) -> String {
        if self.is_custom() {
            self.display_name.clone()
        } else {
            format!("{} (default)", self.display_name)
        }
    }
}

/// Validate a candidate file before any of its contents are read.
///
/// Type is checked first (from the file extension), then the byte size
/// against the 5 MiB ceiling, mirroring the upload contract: a non-image is
/// rejected regardless of size and an oversized image regardless of type.
///
pub fn validate(path: &Path, byte_size: u64) -> Result<ImageFormat, MediaError> {
    let format = ImageFormat::from_path(path).map_err(|_| MediaError::UnsupportedType)?;
    if byte_size > MAX_IMAGE_BYTES {
        return Err(MediaError::TooLarge);
    }
    Ok(format)
}

/// Encode image bytes into a self-contained `data:<mime>;base64,…` URI.
///
pub fn encode_data_uri(format: ImageFormat, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", format.to_mime_type(), STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_image_regardless_of_size() {
        let err = validate(Path::new("notes.txt"), 10).unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType));

        // Still a type rejection even when the size would also fail.
        let err = validate(Path::new("notes.txt"), MAX_IMAGE_BYTES + 1).unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedType));
    }

    #[test]
    fn test_validate_rejects_oversized_image_regardless_of_type() {
        let err = validate(Path::new("diagram.png"), 6 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, MediaError::TooLarge));
    }

    #[test]
    fn test_validate_accepts_image_under_ceiling() {
        let format = validate(Path::new("photo.jpg"), 2 * 1024 * 1024).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_validate_accepts_image_at_exact_ceiling() {
        assert!(validate(Path::new("photo.png"), MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_encode_data_uri_shape() {
        let uri = encode_data_uri(ImageFormat::Png, &[1, 2, 3]);
        assert!(uri.starts_with("data:image/png;base64,"));
        let payload = uri.split(',').nth(1).unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_default_attachment_identity() {
        let attachment = Attachment::default_image();
        assert!(!attachment.is_custom());
        assert_eq!(
            attachment.displayed_name(),
            format!("{} (default)", DEFAULT_IMAGE_NAME)
        );
    }

    #[test]
    fn test_custom_attachment_uses_file_name() {
        let attachment = Attachment {
            source: AttachmentSource::Encoded("data:image/png;base64,".to_string()),
            display_name: "process_map.png".to_string(),
            path: Some(PathBuf::from("/tmp/process_map.png")),
            uploaded_at: Some(Local::now()),
        };
        assert!(attachment.is_custom());
        assert_eq!(attachment.displayed_name(), "process_map.png");
    }

    #[test]
    fn test_media_error_messages_are_user_visible() {
        assert_eq!(
            MediaError::UnsupportedType.to_string(),
            "Please select a valid image file."
        );
        assert_eq!(
            MediaError::TooLarge.to_string(),
            "Image must be 5 MiB or smaller."
        );
    }
}
