use regex::Regex;
use std::sync::LazyLock;

use crate::document::Document;
use crate::extractor::markup::{normalize_breaks, replace_links};

pub const DIRECTOR_ROLES: &[&str] = &["director", "directed by"];
pub const PRODUCER_ROLES: &[&str] = &["producer", "produced by"];
pub const WRITER_ROLES: &[&str] = &[
    "writer",
    "written by",
    "screenplay by",
    "story by",
    "screenplay",
    "story",
];
pub const STARRING_ROLES: &[&str] = &["starring"];

/// Every credited role the crew list is built from.
pub const CREW_ROLES: &[&str] = &[
    "directed by",
    "produced by",
    "written by",
    "screenplay by",
    "story by",
    "music by",
    "cinematography by",
    "edited by",
    "director",
    "producer",
    "writer",
    "screenplay",
    "story",
    "music",
    "composer",
    "cinematography",
    "editing",
];

static CONJUNCTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+and\s+|\s*&\s*").unwrap());

/// Names credited under any of `roles`, in role order, without duplicates.
pub fn extract_crew(doc: &Document, roles: &[&str]) -> Vec<String> {
    let Some(infobox) = doc.infobox() else {
        return Vec::new();
    };

    let mut people: Vec<String> = Vec::new();
    for role in roles {
        let Some(value) = infobox.text(role) else {
            continue;
        };
        for name in split_people(value) {
            if !people.contains(&name) {
                people.push(name);
            }
        }
    }
    people
}

/// Splits a credit value on commas, line breaks and conjunctions, keeping
/// the display text of linked names.
pub fn split_people(value: &str) -> Vec<String> {
    let value = replace_links(&normalize_breaks(value));

    value
        .split([',', '\n'])
        .flat_map(|chunk| CONJUNCTION_REGEX.split(chunk.trim()).collect::<Vec<_>>())
        .map(|name| name.trim().trim_start_matches('*').trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
