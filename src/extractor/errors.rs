use thiserror::Error;

use crate::document::ParseError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("markup parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("article {article} has no resolvable parent id")]
    UnresolvedParent { article: String },
}

impl ExtractError {
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Parse(err) => err.should_retry(),
            // Caller precondition violation; retrying the same input cannot help.
            Self::UnresolvedParent { .. } => false,
        }
    }
}
