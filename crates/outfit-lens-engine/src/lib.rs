pub mod analysis;
pub mod report;
pub mod sample;

// Re-export key types for easier usage
pub use analysis::{
    Analysis, AnalysisError, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_PROMPT, ImageUpload, InlineImage,
    ModelError, UploadError, VisionModel, analyze_image, effective_prompt,
};
pub use report::{Block, ReportLineClassifier, classify};
pub use sample::SAMPLE_REPORT;
