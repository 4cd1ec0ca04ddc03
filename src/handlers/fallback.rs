//! Count-only fallback used when an article declares how many episodes a
//! season has but carries no per-episode rows.

use tracing::warn;

use crate::document::{Infobox, InfoboxValue};
use crate::entities::{Entity, EpisodeEntity, SeasonEntity};
use crate::extractor::markup::first_integer;

const SEASON_NUMBER_KEYS: &[&str] = &["season_number", "season"];
const EPISODE_COUNT_KEYS: &[&str] = &["num_episodes", "episodes"];
const DEFAULT_SEASON_NUMBER: u32 = 1;

fn field<'a>(infobox: Option<&'a Infobox>, keys: &[&str]) -> Option<&'a InfoboxValue> {
    let infobox = infobox?;
    keys.iter().find_map(|k| infobox.get(k))
}

fn whole_number(value: &InfoboxValue) -> Option<u32> {
    value
        .number
        .filter(|n| n.is_finite() && n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}

/// Season number from the infobox: numeric value, then the first integer in
/// its text, then `1`.
pub fn resolve_season_number(infobox: Option<&Infobox>) -> u32 {
    field(infobox, SEASON_NUMBER_KEYS)
        .and_then(|v| whole_number(v).or_else(|| first_integer(&v.text)))
        .unwrap_or(DEFAULT_SEASON_NUMBER)
}

/// Declared episode count, when positive.
pub fn episode_count(infobox: Option<&Infobox>) -> Option<u32> {
    field(infobox, EPISODE_COUNT_KEYS)
        .and_then(|v| whole_number(v).or_else(|| first_integer(&v.text)))
        .filter(|n| *n > 0)
}

/// One season plus `num_episodes` placeholder episodes, or `None` when the
/// infobox declares no episode count.
pub fn placeholder_season(
    parent_id: &str,
    lang: &str,
    infobox: Option<&Infobox>,
    max_episodes: u32,
) -> Option<Vec<Entity>> {
    let declared = episode_count(infobox)?;
    let season_number = resolve_season_number(infobox);

    let count = if declared > max_episodes {
        warn!(
            parent_id,
            declared, max_episodes, "episode count exceeds placeholder cap, truncating"
        );
        max_episodes
    } else {
        declared
    };

    let season = SeasonEntity::new(
        parent_id,
        lang,
        season_number,
        Some(season_number.to_string()),
    );
    let mut entities = Vec::with_capacity(count as usize + 1);
    entities.extend((0..count).map(|i| Entity::Episode(EpisodeEntity::placeholder(&season, i))));
    entities.insert(0, Entity::Season(season));
    Some(entities)
}
