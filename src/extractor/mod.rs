pub mod errors;
pub mod fields;
pub mod markup;
pub mod media;
pub mod season;
pub mod sections;

#[cfg(test)]
mod tests;

pub use errors::ExtractError;
pub use media::MediaStrategy;
pub use season::{ParentIndex, SeasonStrategy};

use crate::article::ArticleRecord;
use crate::entities::Entity;

/// Entities produced for one article, plus whether season extraction
/// degraded to nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub entities: Vec<Entity>,
    pub failed: bool,
}

impl Extraction {
    pub fn ok(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            failed: false,
        }
    }

    /// Nothing extracted; counted as one failure by the caller.
    pub fn failure() -> Self {
        Self {
            entities: Vec::new(),
            failed: true,
        }
    }

    /// Appends `other`'s entities; a failure in either side is kept.
    pub fn merge(&mut self, other: Extraction) {
        self.entities.extend(other.entities);
        self.failed |= other.failed;
    }
}

/// Turns one article into entities.
#[cfg_attr(test, mockall::automock)]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn parse(&self, article: &ArticleRecord) -> Result<Extraction, ExtractError>;
}
