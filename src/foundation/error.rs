use std::path::PathBuf;

pub type PolarwaveResult<T> = Result<T, PolarwaveError>;

#[derive(thiserror::Error, Debug)]
pub enum PolarwaveError {
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PolarwaveError {
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound(path.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
