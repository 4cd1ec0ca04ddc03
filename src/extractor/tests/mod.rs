use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

use crate::article::ArticleRecord;
use crate::config::ExtractorConfig;
use crate::document::{Document, Infobox, InfoboxField, InfoboxValue, JsonTreeParser, Section};
use crate::entities::{AirDate, Entity, EntityKind, MediaEntity, MediaRegion, MediaType};
use crate::extractor::{MediaStrategy, Strategy};


/// Document whose lead section holds one infobox with `fields` as plain text.
pub(crate) fn infobox_doc(fields: &[(&str, &str)]) -> Document {
    Document {
        title: None,
        sections: vec![Section {
            title: String::new(),
            infoboxes: vec![Infobox {
                kind: None,
                fields: fields
                    .iter()
                    .map(|(key, text)| InfoboxField {
                        key: key.to_string(),
                        value: InfoboxValue {
                            text: text.to_string(),
                            ..Default::default()
                        },
                    })
                    .collect(),
            }],
            ..Default::default()
        }],
    }
}

#[derive(Deserialize)]
struct Fixture {
    record: ArticleRecord,
    tree: serde_json::Value,
}

fn load_fixture(name: &str) -> ArticleRecord {
    let raw = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    let fixture: Fixture = serde_json::from_str(&raw).expect("Invalid fixture");

    let mut record = fixture.record;
    record.source_text = fixture.tree.to_string();
    record
}

fn strategy() -> MediaStrategy {
    MediaStrategy::new(JsonTreeParser, ExtractorConfig::default())
}

fn media_of(entities: &[Entity]) -> &MediaEntity {
    entities
        .iter()
        .find_map(|e| match e {
            Entity::Media(media) => Some(media),
            _ => None,
        })
        .expect("media entity")
}

#[test]
fn test_extract_series_article() {
    let article = load_fixture("series.json");
    let extraction = strategy().parse(&article).unwrap();

    assert!(!extraction.failed);

    let ids: Vec<&str> = extraction.entities.iter().map(|e| e.id()).collect();
    assert_eq!(
        ids,
        vec![
            "Q98765432-1",
            "Q98765432-1-ep-1",
            "Q98765432-1-ep-2",
            "Q98765432-2",
            "Q98765432-2-ep-10",
            "Q98765432",
        ]
    );

    let Entity::Episode(first) = &extraction.entities[1] else {
        panic!("expected an episode");
    };
    assert_eq!(first.title.as_deref(), Some("Welcome to the Playground"));
    assert_eq!(first.written_by.as_deref(), Some("Christian Linke and Alex Yee"));
    assert_eq!(first.episode_number2.as_deref(), Some("1"));
    assert!(first.extra.is_empty());

    // The {{Date}} row after episode 1 belongs to episode 2.
    let Entity::Episode(second) = &extraction.entities[2] else {
        panic!("expected an episode");
    };
    assert_eq!(
        second.original_air_date,
        Some(AirDate::Date(NaiveDate::from_ymd_opt(2021, 11, 6).unwrap()))
    );
    assert_eq!(second.short_summary.as_deref(), Some("Jayce is exiled."));

    let media = media_of(&extraction.entities);
    assert_eq!(media.title.as_deref(), Some("Arcane"));
    assert_eq!(media.original_title.as_deref(), Some("Arcane (TV series)"));
    assert_eq!(media.media_type, MediaType::Series);
    assert_eq!(media.genre, vec!["Steampunk", "Action", "Drama", "Fantasy"]);
    assert_eq!(media.director, vec!["Pascal Charrue", "Arnaud Delord"]);
    assert_eq!(
        media.starring,
        vec!["Hailee Steinfeld", "Ella Purnell", "Kevin Alejandro"]
    );
    assert_eq!(
        media.crew,
        vec!["Pascal Charrue", "Arnaud Delord", "Alexander Temple"]
    );
    assert_eq!(media.running_time.as_deref(), Some("39–44 minutes"));
    assert_eq!(
        media.plot_summary.as_deref(),
        Some("Arcane is an adult animated steampunk action-adventure television series.")
    );
    assert_eq!(
        media.poster_image.as_deref(),
        Some("https://en.wikipedia.org/wiki/Special:FilePath/Arcane_League_of_Legends.png")
    );
    assert_eq!(media.external_ids.imdb_id.as_deref(), Some("tt11126994"));
    assert_eq!(media.external_ids.tvguide.as_deref(), Some("1000644329"));
    assert_eq!(media.external_ids.allmovie_id, None);
    assert_eq!(
        media.trailers,
        vec!["https://www.youtube.com/watch?v=fXmAurh012s"]
    );
    assert_eq!(
        media.region,
        vec![
            MediaRegion {
                continent: "Europe".into(),
                region: Some("Western_Europe".into()),
            },
            MediaRegion {
                continent: "North_America".into(),
                region: None,
            },
        ]
    );
    assert_eq!(media.urls, vec!["Arcane: League of Legends", "Arcane (series)"]);
    assert_eq!(media.popularity.wiki, Some(0.00041));
    assert_eq!(media.links.len(), 4);

    assert_eq!(media.awards.len(), 1);
    assert_eq!(media.awards[0].year, Some(2022));
    assert_eq!(
        media.awards[0].category.as_deref(),
        Some("Outstanding Animated Program")
    );

    assert_eq!(
        media.meta["image"].caption.as_deref(),
        Some("Promotional poster")
    );
    assert!(!media.meta.contains_key("caption"));
    assert_eq!(media.meta["num_episodes"].number, Some(18.0));
    assert_eq!(
        media.meta["first_aired"].date,
        NaiveDate::from_ymd_opt(2021, 11, 6)
    );
    assert_eq!(media.meta["network"].text, vec!["Netflix"]);
}

#[test]
fn test_series_sections_skip_boilerplate() {
    let article = load_fixture("series.json");
    let extraction = strategy().parse(&article).unwrap();
    let media = media_of(&extraction.entities);

    let titles: Vec<&str> = media.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Premise", "Season 1 (2021)", "Images"]);
    assert!(media.sections.iter().all(|s| !s.content.trim().is_empty()));
    assert_eq!(
        media.sections[1].content,
        "{{Episode table |background=#2B4B63 }}"
    );
}

#[test]
fn test_extract_film_article() {
    let article = load_fixture("film.json");
    let extraction = strategy().parse(&article).unwrap();

    assert!(!extraction.failed);
    assert_eq!(extraction.entities.len(), 1);

    let media = media_of(&extraction.entities);
    assert_eq!(media.id, "Q1134");
    assert_eq!(media.media_type, MediaType::Documentary);
    assert_eq!(media.director, vec!["John", "Jane", "Sam"]);
    assert_eq!(media.producer, vec!["Jane Roe"]);
    assert_eq!(media.crew, vec!["John", "Jane", "Sam", "Jane Roe"]);
    assert_eq!(media.budget.as_deref(), Some("$1.2 million"));
    assert_eq!(media.running_time.as_deref(), Some("94 minutes"));
    assert_eq!(
        media
            .related_media
            .as_ref()
            .and_then(|r| r.followed_by.as_deref()),
        Some("Sample Film II")
    );
    assert_eq!(media.external_ids.allmovie_id.as_deref(), Some("v553470"));
    assert_eq!(
        media.trailers,
        vec![
            "https://vimeo.com/76979871",
            "https://example.com/sample-film/teaser",
        ]
    );
    assert_eq!(
        media.poster_image.as_deref(),
        Some("https://en.wikipedia.org/wiki/Special:FilePath/Sample_Film_still.jpg")
    );
    assert_eq!(
        media.plot_summary.as_deref(),
        Some("Sample Film is a 2019 documentary about river ferries.")
    );
    assert_eq!(
        media.meta["released"].date,
        NaiveDate::from_ymd_opt(2019, 7, 26)
    );
    assert_eq!(media.popularity.wiki, None);
    assert!(media.region.is_empty());

    let titles: Vec<&str> = media.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Synopsis", "Season 1 of production", "Images"]);
}

#[test]
fn test_extraction_is_idempotent() {
    let article = load_fixture("series.json");
    let strategy = strategy();

    let first = strategy.parse(&article).unwrap();
    let second = strategy.parse(&article).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first.entities).unwrap();
    let second_json = serde_json::to_string(&second.entities).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_every_child_id_derives_from_parent() {
    let article = load_fixture("series.json");
    let extraction = strategy().parse(&article).unwrap();

    for entity in &extraction.entities {
        match entity {
            Entity::Season(season) => {
                let number = season.season_number.unwrap();
                assert_eq!(season.id, format!("{}-{}", season.parent_id, number));
            }
            Entity::Episode(episode) => {
                assert_eq!(
                    episode.id,
                    format!("{}-ep-{}", episode.parent_id, episode.episode_number)
                );
                assert_eq!(episode.lang, "en");
            }
            Entity::Media(_) => {}
        }
    }
}

#[test]
fn test_series_without_rows_or_count_reports_failure() {
    let mut article = load_fixture("series.json");
    let mut tree: serde_json::Value = serde_json::from_str(&article.source_text).unwrap();
    let sections = tree["sections"].as_array_mut().unwrap();
    sections.retain(|s| {
        let title = s["title"].as_str().unwrap_or_default();
        !title.starts_with("Season")
    });
    let fields = sections[0]["infoboxes"][0]["fields"].as_array_mut().unwrap();
    fields.retain(|f| f["key"] != "num_episodes");
    article.source_text = tree.to_string();

    let extraction = strategy().parse(&article).unwrap();

    assert!(extraction.failed);
    let kinds: Vec<EntityKind> = extraction.entities.iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![EntityKind::Media]);
}

#[test]
fn test_series_with_count_only_gets_placeholders() {
    let mut article = load_fixture("series.json");
    let mut tree: serde_json::Value = serde_json::from_str(&article.source_text).unwrap();
    tree["sections"]
        .as_array_mut()
        .unwrap()
        .retain(|s| !s["title"].as_str().unwrap_or_default().starts_with("Season"));
    article.source_text = tree.to_string();

    let extraction = strategy().parse(&article).unwrap();

    assert!(!extraction.failed);
    let seasons = extraction
        .entities
        .iter()
        .filter(|e| e.kind() == EntityKind::Season)
        .count();
    let episodes: Vec<&str> = extraction
        .entities
        .iter()
        .filter_map(|e| match e {
            Entity::Episode(ep) => Some(ep.episode_number.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(seasons, 1);
    assert_eq!(episodes.len(), 18);
    assert_eq!(episodes.first(), Some(&"0"));
    assert_eq!(episodes.last(), Some(&"17"));
    assert_eq!(extraction.entities[18].id(), "Q98765432-1-ep-18");
}

#[test]
fn test_malformed_tree_is_a_parse_error() {
    let mut article = load_fixture("film.json");
    article.source_text = "{\"sections\": [".into();

    let err = strategy().parse(&article).unwrap_err();
    assert!(!err.should_retry());
}
