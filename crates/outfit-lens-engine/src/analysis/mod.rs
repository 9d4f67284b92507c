//! # Report Analysis
//!
//! Everything between a user's photo and a classified report, except the
//! model call itself: upload validation, data URL handling, prompt choice,
//! and classification of the returned text. The model is reached through
//! the [`VisionModel`] trait so transports stay outside the engine.

mod image;
mod model;
mod prompt;

pub use image::{DEFAULT_MAX_IMAGE_BYTES, ImageUpload, InlineImage, UploadError};
pub use model::{ModelError, VisionModel};
pub use prompt::{DEFAULT_PROMPT, effective_prompt};

use crate::report::{Block, classify};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Failed to analyze image: Invalid image data format")]
    InvalidImageFormat,
    #[error("Failed to analyze image: Invalid base64 image data")]
    InvalidBase64,
    #[error("Failed to analyze image: No analysis generated")]
    EmptyResponse,
    #[error("Failed to analyze image: {0}")]
    Model(#[from] ModelError),
}

/// A model report together with its classified blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub text: String,
    pub blocks: Vec<Block>,
}

impl Analysis {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let blocks = classify(&text);
        Self { text, blocks }
    }
}

/// Sends an image data URL to `model` and classifies the report it returns.
///
/// `custom_prompt` replaces [`DEFAULT_PROMPT`] when it is non-blank.
pub fn analyze_image<M: VisionModel + ?Sized>(
    model: &M,
    data_url: &str,
    custom_prompt: Option<&str>,
) -> Result<Analysis, AnalysisError> {
    let image = InlineImage::from_data_url(data_url)?;
    let prompt = effective_prompt(custom_prompt);

    let text = model.generate(&image, prompt).map_err(|e| {
        log::error!("Error analyzing image: {e}");
        AnalysisError::Model(e)
    })?;
    if text.is_empty() {
        log::error!("Error analyzing image: model returned an empty report");
        return Err(AnalysisError::EmptyResponse);
    }

    Ok(Analysis::from_text(text))
}
