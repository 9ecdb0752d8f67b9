use boxpaint_render_core::RenderError;
use boxpaint_style::StyleParseError;
use boxpaint_tree::TreeError;
use thiserror::Error;

/// Everything that can go wrong between a box description and PDF bytes.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Box tree is invalid: {0}")]
    Tree(#[from] TreeError),

    #[error("Style is invalid: {0}")]
    Style(#[from] StyleParseError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document description is invalid: {0}")]
    InvalidDocument(String),
}
