use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// --- Entity envelope ---

/// Every extracted record. `type` is the discriminator on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Media(MediaEntity),
    Season(SeasonEntity),
    Episode(EpisodeEntity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Media,
    Season,
    Episode,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Season => "season",
            Self::Episode => "episode",
        }
    }
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Media(_) => EntityKind::Media,
            Self::Season(_) => EntityKind::Season,
            Self::Episode(_) => EntityKind::Episode,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Media(m) => &m.id,
            Self::Season(s) => &s.id,
            Self::Episode(e) => &e.id,
        }
    }

    pub fn lang(&self) -> &str {
        match self {
            Self::Media(m) => &m.lang,
            Self::Season(s) => &s.lang,
            Self::Episode(e) => &e.lang,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Self::Media(_) => None,
            Self::Season(s) => Some(&s.parent_id),
            Self::Episode(e) => Some(&e.parent_id),
        }
    }
}

pub fn season_id(parent_id: &str, season_number: u32) -> String {
    format!("{parent_id}-{season_number}")
}

pub fn episode_id(season_id: &str, episode_number: &str) -> String {
    format!("{season_id}-ep-{episode_number}")
}

/// --- Media ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntity {
    pub id: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub sections: Vec<MediaSection>,
    pub media_type: MediaType,
    pub meta: MediaMeta,
    pub external_ids: ExternalIds,
    pub links: Vec<String>,
    pub region: Vec<MediaRegion>,
    pub popularity: MediaPopularity,
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_media: Option<RelatedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_image: Option<String>,
    pub trailers: Vec<String>,
    pub director: Vec<String>,
    pub producer: Vec<String>,
    pub writer: Vec<String>,
    pub crew: Vec<String>,
    pub starring: Vec<String>,
    pub genre: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_summary: Option<String>,
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    #[default]
    Movie,
    Series,
    Anime,
    Documentary,
    TvSpecial,
    ShortFilm,
}

/// Normalized, boilerplate-free content block. `content` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSection {
    pub title: String,
    pub original_title: String,
    pub content: String,
}

/// Infobox fields keyed by their source name.
pub type MediaMeta = BTreeMap<String, MetaEntry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub links: Vec<MetaLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "imdbID", skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    #[serde(rename = "allmovieID", skip_serializing_if = "Option::is_none")]
    pub allmovie_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvguide: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRegion {
    pub continent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaPopularity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preceded_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub result: String,
    pub nominee: String,
    pub name_ids: Vec<String>,
    pub nominee_ids: Vec<String>,
}

/// --- Seasons & episodes ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonEntity {
    pub id: String,
    pub lang: String,
    pub parent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
}

impl SeasonEntity {
    pub fn new(parent_id: &str, lang: &str, season_number: u32, title: Option<String>) -> Self {
        Self {
            id: season_id(parent_id, season_number),
            lang: lang.to_string(),
            parent_id: parent_id.to_string(),
            title,
            season_number: Some(season_number),
        }
    }
}

/// Original air date: a real date when the source was date-shaped, else the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AirDate {
    Date(NaiveDate),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeEntity {
    pub id: String,
    pub lang: String,
    pub parent_id: String,
    pub episode_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_air_date: Option<AirDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<String>,
    /// Template parameters without a modelled field.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub extra: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sections: Vec<MediaSection>,
}

impl EpisodeEntity {
    /// Count-only episode synthesized when per-episode detail is missing.
    ///
    /// `episodeNumber` is the zero-based index while the id uses `index + 1`.
    pub fn placeholder(season: &SeasonEntity, index: u32) -> Self {
        Self {
            id: episode_id(&season.id, &(index + 1).to_string()),
            lang: season.lang.clone(),
            parent_id: season.id.clone(),
            episode_number: index.to_string(),
            ..Default::default()
        }
    }
}
