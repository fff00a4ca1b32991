use thiserror::Error;

use crate::resizer::pad::{Pad, SelectionTarget};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResizerError {
    #[error("Invalid pad for this operation: {0:?}")]
    InvalidPad(Pad),

    #[error("Unsupported selection target: {0:?}")]
    InvalidSelectionTarget(SelectionTarget),

    #[error("No media bus code at index {0}")]
    EnumerationExhausted(u32),

    #[error("Failed to register resizer subdev: {0}")]
    Registration(String),
}

pub type Result<T> = std::result::Result<T, ResizerError>;
