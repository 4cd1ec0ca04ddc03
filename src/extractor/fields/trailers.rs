use crate::article::ArticleRecord;
use crate::document::Document;

const TRAILER_MARKERS: &[&str] = &["trailer", "preview", "youtube", "vimeo"];

/// Trailer-looking outbound links plus the infobox `trailer` link, without duplicates.
pub fn extract_trailers(article: &ArticleRecord, doc: &Document) -> Vec<String> {
    let mut trailers: Vec<String> = Vec::new();
    for link in &article.external_link {
        let lower = link.to_lowercase();
        if TRAILER_MARKERS.iter().any(|marker| lower.contains(marker)) && !trailers.contains(link) {
            trailers.push(link.clone());
        }
    }

    if let Some(link) = infobox_trailer(doc)
        && !trailers.contains(&link)
    {
        trailers.push(link);
    }

    trailers
}

fn infobox_trailer(doc: &Document) -> Option<String> {
    let value = doc.infobox()?.get("trailer")?;
    value
        .links
        .first()
        .and_then(|l| l.href.clone())
        .or_else(|| {
            let text = value.text.trim();
            (text.starts_with("http://") || text.starts_with("https://")).then(|| text.to_string())
        })
}
