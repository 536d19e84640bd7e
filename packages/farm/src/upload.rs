//! # Crop image uploads
//!
//! Only images are accepted. A reported content type decides on its own:
//! `image/*` passes and anything else is rejected. When no type is reported
//! (desktop file pickers often leave it blank) the first bytes must carry a
//! known image signature:
//!
//! | Format | Signature |
//! |--------|-----------|
//! | PNG | `89 50 4E 47 0D 0A 1A 0A` |
//! | JPEG | `FF D8 FF` |
//! | GIF | `GIF87a` / `GIF89a` |
//! | WEBP | `RIFF....WEBP` |
//! | BMP | `BM` |
//!
//! Accepted files become an [`UploadedImage`] carrying a `data:` URL preview.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{name} is not an image")]
    NotAnImage { name: String },
    #[error("{name} is empty")]
    Empty { name: String },
}

/// How the file reached the page; only changes the wording of rejections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadSource {
    Drop,
    Browse,
}

impl UploadSource {
    pub fn rejection_message(&self) -> &'static str {
        match self {
            UploadSource::Drop => "Please drop an image file",
            UploadSource::Browse => "Please select an image file",
        }
    }
}

/// A validated image ready to preview and analyse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: String,
    pub mime: String,
    pub size: usize,
    pub data_url: String,
}

impl UploadedImage {
    pub fn from_bytes(name: &str, content_type: Option<&str>, bytes: &[u8]) -> Result<Self, UploadError> {
        let mime = match content_type.map(str::trim).filter(|ct| !ct.is_empty()) {
            Some(ct) if ct.starts_with("image/") => Some(ct),
            Some(_) => None,
            None => sniff(bytes),
        };
        let Some(mime) = mime else {
            tracing::warn!("Rejected upload {} ({:?})", name, content_type);
            return Err(UploadError::NotAnImage {
                name: name.to_string(),
            });
        };
        if bytes.is_empty() {
            return Err(UploadError::Empty {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            mime: mime.to_string(),
            size: bytes.len(),
            data_url: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
        })
    }
}

/// Whether a reported content type is an image, so rejects can skip reading the file.
pub fn is_image_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.starts_with("image/"))
}

fn sniff(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"BM") {
        Some("image/bmp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

    #[test]
    fn test_declared_image_type() {
        let image = UploadedImage::from_bytes("leaf.jpg", Some("image/jpeg"), b"not really").unwrap();
        assert_eq!(image.mime, "image/jpeg");
        assert_eq!(image.size, 10);
        assert!(image.data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_sniffed_without_type() {
        let image = UploadedImage::from_bytes("leaf", None, PNG_HEADER).unwrap();
        assert_eq!(image.mime, "image/png");

        let mut webp = b"RIFF\0\0\0\0WEBPVP8 ".to_vec();
        webp.extend_from_slice(&[0; 4]);
        assert_eq!(UploadedImage::from_bytes("x", Some(""), &webp).unwrap().mime, "image/webp");
    }

    #[test]
    fn test_non_image_rejected() {
        let err = UploadedImage::from_bytes("notes.pdf", Some("application/pdf"), b"%PDF-1.7").unwrap_err();
        assert_eq!(
            err,
            UploadError::NotAnImage {
                name: "notes.pdf".to_string()
            }
        );
        assert!(UploadedImage::from_bytes("a.txt", None, b"hello").is_err());
    }

    #[test]
    fn test_declared_type_wins_over_signature() {
        let text = UploadedImage::from_bytes("notes.txt", Some("text/plain"), b"BMW tractor service log");
        assert_eq!(
            text,
            Err(UploadError::NotAnImage {
                name: "notes.txt".to_string()
            })
        );

        let pdf = UploadedImage::from_bytes("scan.pdf", Some("application/pdf"), &[0xFF, 0xD8, 0xFF, 0x00]);
        assert!(pdf.is_err());

        // A blank type still falls back to the signature
        let blank = UploadedImage::from_bytes("scan", Some("  "), &[0xFF, 0xD8, 0xFF, 0x00]).unwrap();
        assert_eq!(blank.mime, "image/jpeg");
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = UploadedImage::from_bytes("blank.png", Some("image/png"), &[]).unwrap_err();
        assert!(matches!(err, UploadError::Empty { .. }));
    }

    #[test]
    fn test_rejection_wording() {
        assert_eq!(UploadSource::Drop.rejection_message(), "Please drop an image file");
        assert_eq!(UploadSource::Browse.rejection_message(), "Please select an image file");
        assert!(is_image_type(Some("image/webp")));
        assert!(!is_image_type(Some("text/plain")));
        assert!(!is_image_type(None));
    }
}
