use crate::document::Document;
use crate::extractor::markup::{normalize_breaks, replace_links};

/// Genres from the infobox `genre` value, split on commas, ampersands and line breaks.
pub fn extract_genres(doc: &Document) -> Vec<String> {
    let Some(value) = doc.infobox().and_then(|i| i.text("genre")) else {
        return Vec::new();
    };

    replace_links(&normalize_breaks(value))
        .split([',', '&', '\n'])
        .map(|g| g.trim().trim_start_matches('*').trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}
