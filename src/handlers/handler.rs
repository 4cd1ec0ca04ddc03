use crate::article::ArticleRecord;
use crate::document::Document;
use crate::extractor::{ExtractError, Extraction};

/// A pluggable extractor for entities that live inside article sections
/// (seasons, episodes, ...).
#[cfg_attr(test, mockall::automock)]
pub trait SectionHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the article's template list contains something this handler understands.
    fn has_support(&self, templates: &[String]) -> bool;

    /// Extract entities from an already parsed article.
    fn extract(&self, article: &ArticleRecord, doc: &Document) -> Result<Extraction, ExtractError>;
}
