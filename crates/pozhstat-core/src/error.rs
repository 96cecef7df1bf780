use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PozhstatError {
    #[error("failed to load object tree from {path}: {reason}")]
    TreeLoad { path: PathBuf, reason: String },

    #[error("invalid object tree: {0}")]
    TreeInvalid(String),

    #[error("unknown victim field '{0}'. Expected one of: socialStatus, condition, deathCause, deathPlace")]
    UnknownField(String),

    #[error("unknown report form '{0}'. Expected 'form5' or 'form7'")]
    UnknownForm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
