pub mod errors;
pub mod parser;
pub mod types;

pub use errors::ParseError;
pub use parser::{JsonTreeParser, MarkupParser};
#[cfg(test)]
pub use parser::MockMarkupParser;
pub use types::{Document, Infobox, InfoboxField, InfoboxValue, Link, Section, Template};
