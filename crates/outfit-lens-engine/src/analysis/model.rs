use super::image::InlineImage;

/// Failure reported by a [`VisionModel`]. Opaque: only a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ModelError {
    message: String,
}

impl ModelError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A generative model that writes a text report about an image.
///
/// Implementations own transport, authentication and model selection.
pub trait VisionModel {
    fn generate(&self, image: &InlineImage, prompt: &str) -> Result<String, ModelError>;
}
