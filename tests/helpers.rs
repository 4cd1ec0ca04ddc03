#![allow(dead_code)]

use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use mediawiki_extract::article::ArticleRecord;

pub const EPISODE_TABLE: &str = "Module:Episode table/styles.css";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Article whose source text is an already parsed JSON tree.
pub fn article(id: &str, title: &str, templates: &[&str], tree: Value) -> ArticleRecord {
    ArticleRecord {
        page_id: 1,
        wikibase_item: id.to_string(),
        title: title.to_string(),
        language: "en".to_string(),
        source_text: tree.to_string(),
        template: templates.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

/// Lead section carrying an infobox built from `(key, text, number)` triples.
pub fn lead(text: &str, fields: &[(&str, &str, Option<f64>)]) -> Value {
    let fields: Vec<Value> = fields
        .iter()
        .map(|(key, text, number)| json!({ "key": key, "text": text, "number": number }))
        .collect();
    json!({
        "title": "",
        "text": text,
        "infoboxes": [{ "kind": "television", "fields": fields }]
    })
}

/// Section holding one `{{Episode list}}` row per `(number, title)`.
pub fn episode_section(title: &str, episodes: &[(&str, &str)]) -> Value {
    let templates: Vec<Value> = episodes
        .iter()
        .map(|(number, title)| {
            json!({ "template": "Episode list", "EpisodeNumber": number, "Title": title })
        })
        .collect();
    json!({ "title": title, "templates": templates })
}

pub fn text_section(title: &str, text: &str) -> Value {
    json!({ "title": title, "text": text })
}

pub fn tree(title: &str, sections: Vec<Value>) -> Value {
    json!({ "title": title, "sections": sections })
}
