use url::Url;

use crate::article::ArticleRecord;
use crate::entities::ExternalIds;

#[derive(Debug, Clone, Copy)]
enum Catalog {
    Imdb,
    AllMovie,
    TvGuide,
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Index(usize),
    Last,
}

struct CatalogPattern {
    catalog: Catalog,
    host: &'static str,
    first_segment: Option<&'static str>,
    id_segment: Segment,
}

/// Recognized catalog URLs and the path segment holding the record id.
const CATALOG_PATTERNS: &[CatalogPattern] = &[
    CatalogPattern {
        catalog: Catalog::Imdb,
        host: "imdb.com",
        first_segment: Some("title"),
        id_segment: Segment::Index(1),
    },
    CatalogPattern {
        catalog: Catalog::AllMovie,
        host: "allmovie.com",
        first_segment: None,
        id_segment: Segment::Index(1),
    },
    CatalogPattern {
        catalog: Catalog::TvGuide,
        host: "tvguide.com",
        first_segment: Some("tvshows"),
        id_segment: Segment::Last,
    },
];

/// Catalog ids found in the article's outbound links; the first link per catalog wins.
pub fn extract_external_ids(article: &ArticleRecord) -> ExternalIds {
    let mut ids = ExternalIds::default();

    for link in &article.external_link {
        let Ok(url) = Url::parse(link) else {
            continue;
        };
        for pattern in CATALOG_PATTERNS {
            let Some(id) = match_catalog(&url, pattern) else {
                continue;
            };
            let slot = match pattern.catalog {
                Catalog::Imdb => &mut ids.imdb_id,
                Catalog::AllMovie => &mut ids.allmovie_id,
                Catalog::TvGuide => &mut ids.tvguide,
            };
            if slot.is_none() {
                *slot = Some(id);
            }
        }
    }

    ids
}

fn match_catalog(url: &Url, pattern: &CatalogPattern) -> Option<String> {
    let host = url.host_str()?;
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host);
    if host != pattern.host {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    if let Some(first) = pattern.first_segment
        && segments.first() != Some(&first)
    {
        return None;
    }

    let id = match pattern.id_segment {
        Segment::Index(i) => segments.get(i),
        Segment::Last => segments.last(),
    }?;
    Some(id.to_string())
}
