use boxpaint_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Box index {0} does not exist in this tree")]
    UnknownBox(usize),

    #[error("Invalid style on <{tag}>: {source}")]
    Style {
        tag: String,
        #[source]
        source: StyleParseError,
    },

    #[error("Malformed style declaration '{0}'")]
    Declaration(String),

    #[error("Invalid box description: {0}")]
    Json(#[from] serde_json::Error),
}
