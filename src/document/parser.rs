use crate::document::{errors::ParseError, types::Document};

/// Turns article source text into a navigable [`Document`].
///
/// Markup parsing itself lives outside this crate; implementations adapt an
/// external parser to this contract.
#[cfg_attr(test, mockall::automock)]
pub trait MarkupParser: Send + Sync {
    fn parse(&self, source: &str) -> Result<Document, ParseError>;
}

/// Reads a tree that an external parser already serialized to JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl MarkupParser for JsonTreeParser {
    fn parse(&self, source: &str) -> Result<Document, ParseError> {
        if source.trim().is_empty() {
            return Err(ParseError::EmptySource);
        }
        Ok(serde_json::from_str(source)?)
    }
}
