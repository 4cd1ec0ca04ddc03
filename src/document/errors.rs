use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed document tree: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("empty source text")]
    EmptySource,

    #[error("markup parser unavailable: {0}")]
    Unavailable(String),
}

impl ParseError {
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Malformed(_) => false,
            Self::EmptySource => false,
            Self::Unavailable(_) => true,
        }
    }
}
