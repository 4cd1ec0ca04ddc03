use std::fmt;

use crate::config::ExtractorConfig;
use crate::handlers::{SectionHandler, SeasonExtractor};

/// Ordered list of section handlers owned by a strategy.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn SectionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registry with the built-in handlers.
    pub fn with_defaults(config: &ExtractorConfig) -> Self {
        let mut registry = Self::new();
        registry.register(SeasonExtractor::new(config));
        registry
    }

    /// Append a handler; handlers run in registration order.
    pub fn register<H: SectionHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    /// Handlers whose support test passes for `templates`, in registration order.
    pub fn supporting<'a>(
        &'a self,
        templates: &'a [String],
    ) -> impl Iterator<Item = &'a dyn SectionHandler> + 'a {
        self.handlers
            .iter()
            .map(|h| h.as_ref())
            .filter(move |h| h.has_support(templates))
    }

    /// Get all registered handler names
    pub fn registered_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.registered_names())
            .finish()
    }
}
