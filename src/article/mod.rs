use serde::{Deserialize, Serialize};

/// Raw article as delivered by the retrieval index, plus its sidecar metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleRecord {
    pub page_id: i64,
    pub wikibase_item: String,
    pub title: String,
    pub language: String,
    pub source_text: String,
    pub external_link: Vec<String>,
    pub weighted_tags: Vec<String>,
    pub template: Vec<String>,
    pub redirect: Vec<Redirect>,
    pub popularity_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub namespace: i32,
    pub title: String,
}

impl ArticleRecord {
    /// Titles of the pages redirecting to this article.
    pub fn redirect_titles(&self) -> Vec<String> {
        self.redirect.iter().map(|r| r.title.clone()).collect()
    }
}
