use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Navigable tree produced by the markup parser for one article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: Option<String>,
    pub sections: Vec<Section>,
}

/// One flattened section. The lead section has an empty title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: String,
    /// Rendered plain text.
    pub text: String,
    /// Raw section markup.
    pub wikitext: String,
    /// Rendered paragraphs, empty when the parser does not segment them.
    pub paragraphs: Vec<String>,
    /// Template invocations in document order.
    pub templates: Vec<Template>,
    pub infoboxes: Vec<Infobox>,
}

/// A template invocation such as `{{Episode list|EpisodeNumber=1|...}}`.
///
/// Scalar parameters are kept as text. Lists and nested objects are dropped,
/// and a missing name leaves the template unmatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTemplate")]
pub struct Template {
    #[serde(rename = "template")]
    pub name: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct RawTemplate {
    #[serde(rename = "template", default)]
    name: Value,
    #[serde(flatten)]
    params: BTreeMap<String, Value>,
}

impl From<RawTemplate> for Template {
    fn from(raw: RawTemplate) -> Self {
        Self {
            name: scalar_text(raw.name).unwrap_or_default(),
            params: raw
                .params
                .into_iter()
                .filter_map(|(key, value)| Some((key, scalar_text(value)?)))
                .collect(),
        }
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infobox {
    pub kind: Option<String>,
    /// Fields in source order.
    pub fields: Vec<InfoboxField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoboxField {
    pub key: String,
    #[serde(flatten)]
    pub value: InfoboxValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoboxValue {
    pub text: String,
    pub number: Option<f64>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub page: Option<String>,
    pub text: Option<String>,
    pub href: Option<String>,
}

impl Document {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section whose title matches exactly.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// First section whose title matches ignoring ASCII case.
    pub fn section_ignore_case(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.title.trim().eq_ignore_ascii_case(title))
    }

    /// The untitled lead section.
    pub fn lead(&self) -> Option<&Section> {
        self.section("")
    }

    /// First infobox anywhere in the article.
    pub fn infobox(&self) -> Option<&Infobox> {
        self.sections.iter().flat_map(|s| s.infoboxes.iter()).next()
    }

    /// First infobox of the lead section, falling back to the first infobox anywhere.
    pub fn lead_infobox(&self) -> Option<&Infobox> {
        self.lead()
            .and_then(|s| s.infoboxes.first())
            .or_else(|| self.infobox())
    }
}

impl Template {
    pub fn new<I, K, V>(name: &str, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.to_string(),
            params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Case-insensitive template name check.
    pub fn is(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name)
    }

    /// Non-blank parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

impl Infobox {
    /// Looks up a field; keys match case-insensitively and `_` matches a space.
    pub fn get(&self, key: &str) -> Option<&InfoboxValue> {
        let wanted = normalize_key(key);
        self.fields
            .iter()
            .find(|f| normalize_key(&f.key) == wanted)
            .map(|f| &f.value)
    }

    /// Non-blank text of a field.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(|v| v.text.trim())
            .filter(|t| !t.is_empty())
    }

    /// First key of `keys` that has non-blank text.
    pub fn text_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.text(k))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', " ")
}
