use crate::document::{Document, Section};
use crate::entities::MediaSection;

/// Section titles that never carry catalog content. The empty title is the
/// lead section, which feeds the description instead.
const IGNORE_SECTIONS: [&str; 6] = [
    "Casting",
    "References",
    "External links",
    "Cast",
    "See also",
    "",
];

/// Flattens the document into content blocks, preserving document order.
pub fn extract_sections(doc: &Document) -> Vec<MediaSection> {
    doc.sections()
        .iter()
        .filter(|section| !IGNORE_SECTIONS.contains(&section.title.as_str()))
        .filter_map(|section| {
            let content = section_content(section)?;
            Some(MediaSection {
                title: section.title.clone(),
                original_title: section.title.clone(),
                content,
            })
        })
        .collect()
}

fn section_content(section: &Section) -> Option<String> {
    let text = section.text.trim();
    let content = if text.is_empty() {
        section.wikitext.trim()
    } else {
        text
    };
    (!content.is_empty()).then(|| content.to_string())
}
