use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::AnalysisError;

/// Largest upload accepted by default (20 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Please upload a valid image file")]
    NotAnImage { mime_type: String },
    #[error("Image size should be less than {}MB", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },
    #[error("Failed to read the image file. Please try again.")]
    Read(#[from] std::io::Error),
}

/// A validated upload held as a `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    mime_type: String,
    data_url: String,
}

impl ImageUpload {
    /// Validates and encodes raw image bytes.
    ///
    /// The mime type must be `image/*` and the size must not exceed `max_bytes`.
    pub fn from_bytes(
        mime_type: &str,
        bytes: &[u8],
        max_bytes: u64,
    ) -> Result<Self, UploadError> {
        check_mime_type(mime_type)?;
        check_size(bytes.len() as u64, max_bytes)?;

        let data_url = format!("data:{mime_type};base64,{}", STANDARD.encode(bytes));
        log::debug!("encoded {} byte {mime_type} upload", bytes.len());
        Ok(Self {
            mime_type: mime_type.to_string(),
            data_url,
        })
    }

    /// Reads an image file, inferring the mime type from its extension.
    ///
    /// Type and size are checked before the file is read.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self, UploadError> {
        let mime_type = mime_type_for(path);
        check_mime_type(mime_type)?;
        check_size(fs::metadata(path)?.len(), max_bytes)?;

        let bytes = fs::read(path)?;
        Self::from_bytes(mime_type, &bytes, max_bytes)
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

fn check_mime_type(mime_type: &str) -> Result<(), UploadError> {
    if mime_type.starts_with("image/") {
        Ok(())
    } else {
        Err(UploadError::NotAnImage {
            mime_type: mime_type.to_string(),
        })
    }
}

fn check_size(size: u64, limit: u64) -> Result<(), UploadError> {
    if size > limit {
        Err(UploadError::TooLarge { size, limit })
    } else {
        Ok(())
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Image payload handed to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload without the data URL header.
    pub data: String,
}

impl InlineImage {
    /// Mime type declared to the model for every upload.
    pub const MIME_TYPE: &'static str = "image/jpeg";

    /// Extracts the base64 payload from a data URL.
    pub fn from_data_url(data_url: &str) -> Result<Self, AnalysisError> {
        if !data_url.contains("base64") {
            return Err(AnalysisError::InvalidImageFormat);
        }
        match data_url.split_once("base64,") {
            Some((_, payload)) if !payload.is_empty() => Ok(Self {
                mime_type: Self::MIME_TYPE.to_string(),
                data: payload.to_string(),
            }),
            _ => Err(AnalysisError::InvalidBase64),
        }
    }
}
