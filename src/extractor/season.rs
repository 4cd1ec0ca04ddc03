use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::article::ArticleRecord;
use crate::config::ExtractorConfig;
use crate::document::MarkupParser;
use crate::entities::{Entity, SeasonEntity};
use crate::extractor::sections::extract_sections;
use crate::extractor::{ExtractError, Extraction, Strategy};
use crate::handlers::episode_row::collect_episodes;
use crate::handlers::fallback::{placeholder_season, resolve_season_number};

const EPISODE_SECTIONS: &[&str] = &["Episodes", "Episode list"];

/// Season article id to owning series id, supplied by the knowledge-base layer.
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    parents: HashMap<String, String>,
}

impl ParentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, article_id: impl Into<String>, parent_id: impl Into<String>) {
        self.parents.insert(article_id.into(), parent_id.into());
    }

    pub fn parent_of(&self, article_id: &str) -> Option<&str> {
        self.parents
            .get(article_id)
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParentIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (article_id, parent_id) in iter {
            index.insert(article_id, parent_id);
        }
        index
    }
}

/// Extracts one season and its episodes from an article dedicated to a
/// single season.
pub struct SeasonStrategy {
    parser: Box<dyn MarkupParser>,
    parents: ParentIndex,
    config: ExtractorConfig,
}

impl SeasonStrategy {
    pub fn new<P: MarkupParser + 'static>(
        parser: P,
        parents: ParentIndex,
        config: ExtractorConfig,
    ) -> Self {
        Self {
            parser: Box::new(parser),
            parents,
            config,
        }
    }
}

impl Strategy for SeasonStrategy {
    fn name(&self) -> &'static str {
        "season"
    }

    #[instrument(skip_all, fields(article = %article.title, id = %article.wikibase_item))]
    fn parse(&self, article: &ArticleRecord) -> Result<Extraction, ExtractError> {
        let parent_id = self
            .parents
            .parent_of(&article.wikibase_item)
            .ok_or_else(|| ExtractError::UnresolvedParent {
                article: article.wikibase_item.clone(),
            })?;
        let lang = article.language.as_str();

        let doc = self.parser.parse(&article.source_text)?;
        let infobox = doc.lead_infobox();
        let season_number = resolve_season_number(infobox);
        let title = doc
            .title
            .clone()
            .unwrap_or_else(|| season_number.to_string());
        let season = SeasonEntity::new(parent_id, lang, season_number, Some(title));

        let episodes = match EPISODE_SECTIONS.iter().find_map(|t| doc.section(t)) {
            Some(section) => collect_episodes(&section.templates, &season, &extract_sections(&doc)),
            None => {
                debug!("no episodes section");
                Vec::new()
            }
        };

        if !episodes.is_empty() {
            info!(
                season_id = %season.id,
                episodes = episodes.len(),
                "season extracted"
            );
            let mut entities = Vec::with_capacity(episodes.len() + 1);
            entities.push(Entity::Season(season));
            entities.extend(episodes.into_iter().map(Entity::Episode));
            return Ok(Extraction::ok(entities));
        }

        match placeholder_season(
            parent_id,
            lang,
            infobox,
            self.config.max_placeholder_episodes(),
        ) {
            Some(entities) => {
                info!(
                    entities = entities.len(),
                    "no episode rows, using declared episode count"
                );
                Ok(Extraction::ok(entities))
            }
            None => {
                let titles: Vec<&str> = doc.sections().iter().map(|s| s.title.as_str()).collect();
                warn!(?titles, "no episode rows and no episode count");
                Ok(Extraction::failure())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        Document, Infobox, InfoboxField, InfoboxValue, MockMarkupParser, Section, Template,
    };

    fn article() -> ArticleRecord {
        ArticleRecord {
            wikibase_item: "Q200".into(),
            title: "Arcane season 1".into(),
            language: "en".into(),
            source_text: "{}".into(),
            ..Default::default()
        }
    }

    fn parents() -> ParentIndex {
        [("Q200", "Q100")].into_iter().collect()
    }

    fn lead(fields: &[(&str, &str, Option<f64>)]) -> Section {
        Section {
            text: "The first season of Arcane.".into(),
            infoboxes: vec![Infobox {
                kind: Some("television season".into()),
                fields: fields
                    .iter()
                    .map(|(k, text, number)| InfoboxField {
                        key: k.to_string(),
                        value: InfoboxValue {
                            text: text.to_string(),
                            number: *number,
                            links: Vec::new(),
                        },
                    })
                    .collect(),
            }],
            ..Default::default()
        }
    }

    fn strategy(doc: Document) -> SeasonStrategy {
        let mut parser = MockMarkupParser::new();
        parser.expect_parse().returning(move |_| Ok(doc.clone()));
        SeasonStrategy::new(parser, parents(), ExtractorConfig::default())
    }

    #[test]
    fn test_parent_index() {
        let mut index = parents();
        index.insert("Q201", " ");

        assert_eq!(index.parent_of("Q200"), Some("Q100"));
        assert_eq!(index.parent_of("Q201"), None);
        assert_eq!(index.parent_of("Q999"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unresolved_parent_fails_before_parsing() {
        let mut parser = MockMarkupParser::new();
        parser.expect_parse().never();
        let strategy = SeasonStrategy::new(parser, ParentIndex::new(), ExtractorConfig::default());

        let err = strategy.parse(&article()).unwrap_err();
        assert!(matches!(err, ExtractError::UnresolvedParent { ref article } if article == "Q200"));
        assert!(!err.should_retry());
    }

    #[test]
    fn test_episodes_section_rows() {
        let doc = Document {
            title: Some("Arcane season 1".into()),
            sections: vec![
                lead(&[("season_number", "1", Some(1.0))]),
                Section {
                    title: "Episodes".into(),
                    text: "Act I".into(),
                    templates: vec![
                        Template::new("episode list/sublist", [("EpisodeNumber", "1"), ("Title", "Welcome")]),
                        Template::new("Episode list", [("EpisodeNumber", "2")]),
                    ],
                    ..Default::default()
                },
            ],
        };

        let extraction = strategy(doc).parse(&article()).unwrap();
        assert!(!extraction.failed);

        let ids: Vec<&str> = extraction.entities.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["Q100-1", "Q100-1-ep-1", "Q100-1-ep-2"]);

        match &extraction.entities[1] {
            Entity::Episode(ep) => {
                assert_eq!(ep.parent_id, "Q100-1");
                assert_eq!(ep.sections.len(), 1);
                assert_eq!(ep.sections[0].title, "Episodes");
            }
            other => panic!("expected episode, got {other:?}"),
        }
    }

    #[test]
    fn test_count_only_placeholders() {
        let doc = Document {
            title: None,
            sections: vec![lead(&[
                ("season_number", "Season 2", None),
                ("num_episodes", "3", Some(3.0)),
            ])],
        };

        let extraction = strategy(doc).parse(&article()).unwrap();
        let ids: Vec<&str> = extraction.entities.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["Q100-2", "Q100-2-ep-1", "Q100-2-ep-2", "Q100-2-ep-3"]);

        match &extraction.entities[0] {
            Entity::Season(season) => assert_eq!(season.title.as_deref(), Some("2")),
            other => panic!("expected season, got {other:?}"),
        }
    }

    #[test]
    fn test_nothing_usable_is_one_failure() {
        let doc = Document {
            title: Some("Arcane season 1".into()),
            sections: vec![lead(&[]), Section {
                title: "Production".into(),
                text: "Made in Paris.".into(),
                ..Default::default()
            }],
        };

        let extraction = strategy(doc).parse(&article()).unwrap();
        assert!(extraction.failed);
        assert!(extraction.entities.is_empty());
    }

    #[test]
    fn test_ids_are_stable_across_runs() {
        let doc = Document {
            title: None,
            sections: vec![lead(&[("num_episodes", "2", Some(2.0))])],
        };

        let strategy = strategy(doc);
        let first = strategy.parse(&article()).unwrap();
        let second = strategy.parse(&article()).unwrap();
        assert_eq!(first, second);
    }
}
