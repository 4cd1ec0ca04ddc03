use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::article::ArticleRecord;
use crate::config::ExtractorConfig;
use crate::document::Document;
use crate::entities::{Entity, EpisodeEntity, SeasonEntity};
use crate::extractor::{ExtractError, Extraction};
use crate::handlers::SectionHandler;
use crate::handlers::episode_row::collect_episodes;
use crate::handlers::fallback::placeholder_season;

/// Page modules that mark an article as carrying episode tables.
pub const SUPPORTED_TEMPLATES: &[&str] = &["Module:Episode table/styles.css"];

static SEASON_TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^Season (\d+)",
        r"(?i)^Series (\d+)",
        r"(?i)^(\d+)(?:st|nd|rd|th)? (?:seasons?|series)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Season number announced by a section heading such as `Season 2`,
/// `Series 2` or `2 Series`.
pub fn season_number_from_title(title: &str) -> Option<u32> {
    let title = title.trim();
    SEASON_TITLE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(title)?;
        caps.get(1)
            .or_else(|| caps.get(0))
            .and_then(|m| m.as_str().parse().ok())
    })
}

/// Emits seasons and episodes from `Season N` sections of a series article.
#[derive(Debug, Clone)]
pub struct SeasonExtractor {
    supported_templates: Vec<String>,
    max_placeholder_episodes: u32,
}

impl SeasonExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            supported_templates: SUPPORTED_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            max_placeholder_episodes: config.max_placeholder_episodes(),
        }
    }
}

impl SectionHandler for SeasonExtractor {
    fn name(&self) -> &'static str {
        "season_extractor"
    }

    fn has_support(&self, templates: &[String]) -> bool {
        templates
            .iter()
            .any(|t| self.supported_templates.iter().any(|s| s == t))
    }

    fn extract(&self, article: &ArticleRecord, doc: &Document) -> Result<Extraction, ExtractError> {
        let parent_id = article.wikibase_item.trim();
        if parent_id.is_empty() {
            return Err(ExtractError::UnresolvedParent {
                article: article.title.clone(),
            });
        }
        let lang = article.language.as_str();

        let mut seasons: Vec<(SeasonEntity, Vec<EpisodeEntity>)> = Vec::new();
        let mut by_number: HashMap<u32, usize> = HashMap::new();

        for section in doc.sections() {
            let Some(number) = season_number_from_title(&section.title) else {
                continue;
            };

            // A repeated heading adds its rows to the first season with that number.
            if let Some(&slot) = by_number.get(&number) {
                let (season, episodes) = &mut seasons[slot];
                let more = collect_episodes(&section.templates, season, &[]);
                debug!(
                    season_id = %season.id,
                    title = %section.title,
                    episodes = more.len(),
                    "repeated season heading"
                );
                episodes.extend(more);
                continue;
            }

            let season = SeasonEntity::new(parent_id, lang, number, Some(section.title.clone()));
            let episodes = collect_episodes(&section.templates, &season, &[]);
            debug!(
                season_id = %season.id,
                episodes = episodes.len(),
                "season section"
            );

            by_number.insert(number, seasons.len());
            seasons.push((season, episodes));
        }

        let episode_count: usize = seasons.iter().map(|(_, episodes)| episodes.len()).sum();
        if episode_count > 0 {
            let mut entities = Vec::with_capacity(seasons.len() + episode_count);
            for (season, episodes) in seasons {
                entities.push(Entity::Season(season));
                entities.extend(episodes.into_iter().map(Entity::Episode));
            }
            return Ok(Extraction::ok(entities));
        }

        match placeholder_season(
            parent_id,
            lang,
            doc.lead_infobox(),
            self.max_placeholder_episodes,
        ) {
            Some(placeholders) => {
                debug!(
                    parent_id,
                    entities = placeholders.len(),
                    "no episode rows, using declared episode count"
                );
                Ok(Extraction::ok(placeholders))
            }
            None => {
                warn!(
                    parent_id,
                    title = %article.title,
                    "no episode rows and no episode count"
                );
                Ok(Extraction::failure())
            }
        }
    }
}
