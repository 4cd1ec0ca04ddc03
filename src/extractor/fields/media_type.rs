use crate::article::ArticleRecord;
use crate::entities::MediaType;

const TELEVISION_TAG_PREFIX: &str = "classification.ores.articletopic/Culture.Media.Television";

/// Genre fragments that decide the media type, checked in order.
const GENRE_RULES: &[(&str, MediaType)] = &[
    ("anime", MediaType::Anime),
    ("documentary", MediaType::Documentary),
    ("television special", MediaType::TvSpecial),
    ("short film", MediaType::ShortFilm),
];

/// Classifies the article; anything unrecognized is a movie.
pub fn classify_media_type(article: &ArticleRecord, genres: &[String]) -> MediaType {
    let genres: Vec<String> = genres.iter().map(|g| g.to_lowercase()).collect();
    if let Some((_, media_type)) = GENRE_RULES
        .iter()
        .find(|(needle, _)| genres.iter().any(|g| g.contains(needle)))
    {
        return *media_type;
    }

    let is_television = article
        .weighted_tags
        .iter()
        .any(|tag| tag.starts_with(TELEVISION_TAG_PREFIX));
    if is_television {
        MediaType::Series
    } else {
        MediaType::Movie
    }
}
