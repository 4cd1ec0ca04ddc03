//! Accumulates `{{Episode list}}` rows into episode entities.
//!
//! A row is built from one primary template plus any continuation templates
//! (`{{Date}}`, `{{Episode table/part}}`) seen since the previous row. The
//! primary template closes the row.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::document::Template;
use crate::entities::{AirDate, EpisodeEntity, MediaSection, SeasonEntity, episode_id};
use crate::extractor::markup::{parse_date, replace_links};

pub const PRIMARY_TEMPLATES: &[&str] = &[
    "episode list",
    "episode list/sublist",
    "#invoke:episode list",
];

pub const CONTINUATION_TEMPLATES: &[&str] = &["date", "episode table/part"];

/// Presentation-only parameters.
const DROPPED_PARAMS: &[&str] = &["c", "template", "linecolor", "background", "topcolor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EpisodeField {
    EpisodeNumber,
    EpisodeNumber2,
    Title,
    DirectedBy,
    WrittenBy,
    OriginalAirDate,
    ShortSummary,
    Overall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    Text,
    Date,
}

/// Raw parameter name (lowercase, `_` and spaces removed) to canonical field.
const FIELD_ALIASES: &[(&str, EpisodeField, Transform)] = &[
    ("episodenumber", EpisodeField::EpisodeNumber, Transform::Text),
    ("episodenumber2", EpisodeField::EpisodeNumber2, Transform::Text),
    ("title", EpisodeField::Title, Transform::Text),
    ("directedby", EpisodeField::DirectedBy, Transform::Text),
    ("director", EpisodeField::DirectedBy, Transform::Text),
    ("writtenby", EpisodeField::WrittenBy, Transform::Text),
    ("writer", EpisodeField::WrittenBy, Transform::Text),
    ("originalairdate", EpisodeField::OriginalAirDate, Transform::Date),
    ("airdate", EpisodeField::OriginalAirDate, Transform::Date),
    ("released", EpisodeField::OriginalAirDate, Transform::Date),
    ("date", EpisodeField::OriginalAirDate, Transform::Date),
    ("shortsummary", EpisodeField::ShortSummary, Transform::Text),
    ("overall", EpisodeField::Overall, Transform::Text),
];

pub fn is_primary(template: &Template) -> bool {
    PRIMARY_TEMPLATES.iter().any(|name| template.is(name))
}

pub fn is_continuation(template: &Template) -> bool {
    CONTINUATION_TEMPLATES.iter().any(|name| template.is(name))
}

fn normalize_param(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect()
}

/// Working record for the episode currently being assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeRow {
    episode_number: Option<String>,
    episode_number2: Option<String>,
    title: Option<String>,
    directed_by: Option<String>,
    written_by: Option<String>,
    original_air_date: Option<AirDate>,
    short_summary: Option<String>,
    overall: Option<String>,
    extra: BTreeMap<String, String>,
}

impl EpisodeRow {
    /// Merges the template's non-blank parameters; later values win.
    pub fn absorb(&mut self, template: &Template) {
        let ymd = ymd_date(template);

        for (key, raw) in &template.params {
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }
            let normalized = normalize_param(key);
            if DROPPED_PARAMS.contains(&normalized.as_str()) {
                continue;
            }
            if ymd.is_some() && matches!(normalized.as_str(), "year" | "month" | "day") {
                continue;
            }

            match FIELD_ALIASES.iter().find(|(alias, _, _)| *alias == normalized) {
                Some((_, field, transform)) => self.set(*field, *transform, value),
                None => {
                    self.extra.insert(key.trim().to_string(), value.to_string());
                }
            }
        }

        if let Some(date) = ymd {
            self.original_air_date = Some(AirDate::Date(date));
        }
    }

    fn set(&mut self, field: EpisodeField, transform: Transform, value: &str) {
        if transform == Transform::Date {
            self.original_air_date = Some(
                parse_date(value)
                    .map(AirDate::Date)
                    .unwrap_or_else(|| AirDate::Text(value.to_string())),
            );
            return;
        }

        let text = replace_links(value).trim().to_string();
        let slot = match field {
            EpisodeField::EpisodeNumber => &mut self.episode_number,
            EpisodeField::EpisodeNumber2 => &mut self.episode_number2,
            EpisodeField::Title => &mut self.title,
            EpisodeField::DirectedBy => &mut self.directed_by,
            EpisodeField::WrittenBy => &mut self.written_by,
            EpisodeField::ShortSummary => &mut self.short_summary,
            EpisodeField::Overall => &mut self.overall,
            EpisodeField::OriginalAirDate => return,
        };
        *slot = Some(text);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Closes the row into an episode of `season`.
    ///
    /// Rows without an episode number fall back to their 1-based position in
    /// the season so the id stays derivable from the season.
    pub fn finish(
        self,
        season: &SeasonEntity,
        position: usize,
        sections: &[MediaSection],
    ) -> EpisodeEntity {
        let episode_number = self
            .episode_number
            .unwrap_or_else(|| position.to_string());

        EpisodeEntity {
            id: episode_id(&season.id, &episode_number),
            lang: season.lang.clone(),
            parent_id: season.id.clone(),
            episode_number,
            episode_number2: self.episode_number2,
            title: self.title,
            directed_by: self.directed_by,
            written_by: self.written_by,
            original_air_date: self.original_air_date,
            short_summary: self.short_summary,
            overall: self.overall,
            extra: self.extra,
            sections: sections.to_vec(),
        }
    }
}

/// `{{Date|year=2021|month=11|day=6}}`-style date parameters.
fn ymd_date(template: &Template) -> Option<NaiveDate> {
    let year = template.get("year")?.parse().ok()?;
    let month = template.get("month")?.parse().ok()?;
    let day = template.get("day")?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Walks `templates` in document order and emits one episode per primary template.
pub fn collect_episodes(
    templates: &[Template],
    season: &SeasonEntity,
    sections: &[MediaSection],
) -> Vec<EpisodeEntity> {
    let mut episodes = Vec::new();
    let mut row = EpisodeRow::default();

    for template in templates {
        if is_primary(template) {
            row.absorb(template);
            let finished = std::mem::take(&mut row);
            episodes.push(finished.finish(season, episodes.len() + 1, sections));
        } else if is_continuation(template) {
            row.absorb(template);
        }
    }

    episodes
}
