use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use std::sync::LazyLock;

use crate::document::Document;

static FILE_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:File|Image):\s*([^|\]\[\n{}]+)").unwrap());

static BARE_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^|\]\[\n{}:]+\.(?:jpe?g|png|gif|svg|webp|tiff?)$").unwrap()
});

/// Same unreserved set as JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Poster URL from the infobox image, else from the first file in an "Images" section.
pub fn extract_poster_image(doc: &Document, file_path_base: &str) -> Option<String> {
    infobox_file(doc)
        .or_else(|| images_section_file(doc))
        .map(|name| file_path_url(file_path_base, &name))
}

/// Canonical file-path URL for a file name.
pub fn file_path_url(file_path_base: &str, file_name: &str) -> String {
    let name = file_name.trim().replace(' ', "_");
    format!("{file_path_base}{}", utf8_percent_encode(&name, COMPONENT))
}

fn infobox_file(doc: &Document) -> Option<String> {
    let value = doc.infobox()?.get("image")?;
    let text = value.text.trim();

    if let Some(caps) = FILE_REF_REGEX.captures(text) {
        return Some(caps[1].trim().to_string());
    }
    if BARE_IMAGE_REGEX.is_match(text) {
        return Some(text.to_string());
    }
    value
        .links
        .iter()
        .filter_map(|l| l.page.as_deref())
        .find_map(|page| FILE_REF_REGEX.captures(page))
        .map(|caps| caps[1].trim().to_string())
}

fn images_section_file(doc: &Document) -> Option<String> {
    let section = doc.section_ignore_case("images")?;
    FILE_REF_REGEX
        .captures(&section.wikitext)
        .map(|caps| caps[1].trim().to_string())
}
