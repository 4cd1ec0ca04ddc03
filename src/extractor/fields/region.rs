use crate::article::ArticleRecord;
use crate::entities::MediaRegion;

const REGION_TAG_PREFIX: &str = "classification.ores.articletopic/Geography.Regions";

/// Continent/region pairs from the article's weighted topic tags.
///
/// `classification.ores.articletopic/Geography.Regions.Europe.Northern_Europe|512`
/// yields continent `Europe`, region `Northern_Europe`.
pub fn extract_region(article: &ArticleRecord) -> Vec<MediaRegion> {
    article
        .weighted_tags
        .iter()
        .filter_map(|tag| tag.strip_prefix(REGION_TAG_PREFIX))
        .filter_map(|rest| {
            let rest = rest.replace('*', "");
            let path = rest.split('|').next().unwrap_or_default();
            let mut parts = path.split('.').filter(|p| !p.is_empty());
            let continent = parts.next()?.to_string();
            Some(MediaRegion {
                continent,
                region: parts.next().map(str::to_string),
            })
        })
        .collect()
}
