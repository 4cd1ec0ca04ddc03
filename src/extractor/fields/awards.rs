use crate::document::Document;
use crate::entities::Award;
use crate::extractor::markup::first_integer;

pub fn extract_awards(doc: &Document) -> Vec<Award> {
    let Some(section) = doc.section_ignore_case("awards") else {
        return Vec::new();
    };

    section
        .templates
        .iter()
        .filter(|t| t.is("award"))
        .map(|t| Award {
            name: t.get("name").unwrap_or_default().to_string(),
            year: t
                .get("year")
                .and_then(first_integer)
                .and_then(|y| i32::try_from(y).ok()),
            category: t.get("category").map(str::to_string),
            result: t.get("result").unwrap_or_default().to_string(),
            nominee: t.get("nominee").unwrap_or_default().to_string(),
            name_ids: Vec::new(),
            nominee_ids: Vec::new(),
        })
        .collect()
}
