use crate::document::{Document, InfoboxValue};
use crate::entities::{MediaMeta, MetaEntry, MetaLink};
use crate::extractor::markup::parse_date;

const CAPTION_KEY: &str = "caption";
const IMAGE_KEY: &str = "image";

/// Free-form infobox metadata keyed by field name.
///
/// A `caption` attaches to the image entry stored before it; without one it
/// is kept as a regular entry.
pub fn extract_meta(doc: &Document) -> MediaMeta {
    let mut meta = MediaMeta::new();
    let Some(infobox) = doc.infobox() else {
        return meta;
    };

    for field in &infobox.fields {
        let text = text_lines(&field.value.text);

        if field.key.trim().eq_ignore_ascii_case(CAPTION_KEY)
            && let Some(image) = meta.get_mut(IMAGE_KEY)
        {
            image.caption = text.first().cloned();
            continue;
        }

        meta.insert(field.key.clone(), entry(text, &field.value));
    }

    meta
}

fn entry(text: Vec<String>, value: &InfoboxValue) -> MetaEntry {
    let date = match text.as_slice() {
        [single] => parse_date(single),
        _ => None,
    };

    MetaEntry {
        text,
        number: value.number,
        date,
        links: value
            .links
            .iter()
            .map(|l| MetaLink {
                page: l.page.clone(),
                text: l.text.clone(),
            })
            .collect(),
        caption: None,
    }
}

/// Non-blank lines with leading bullet markers removed.
fn text_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches('*').trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
