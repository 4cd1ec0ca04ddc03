use crate::document::Document;
use crate::entities::RelatedMedia;
use crate::extractor::markup::strip_brackets;

const BUDGET_KEYS: &[&str] = &["budget"];
const RUNNING_TIME_KEYS: &[&str] = &["runtime", "running_time"];

pub fn extract_budget(doc: &Document) -> Option<String> {
    doc.infobox()?.text_any(BUDGET_KEYS).map(str::to_string)
}

pub fn extract_running_time(doc: &Document) -> Option<String> {
    doc.infobox()?
        .text_any(RUNNING_TIME_KEYS)
        .map(str::to_string)
}

/// Sequel/prequel pointers from `followed_by` / `preceded_by`.
pub fn extract_related_media(doc: &Document) -> Option<RelatedMedia> {
    let infobox = doc.infobox()?;
    let related = RelatedMedia {
        followed_by: infobox.text("followed_by").map(strip_brackets),
        preceded_by: infobox.text("preceded_by").map(strip_brackets),
    };

    (related.followed_by.is_some() || related.preceded_by.is_some()).then_some(related)
}
