use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static WIKI_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]*)(?:\|([^\]]*))?\]\]").unwrap());

static INTEGER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y",
    "%B %e, %Y",
    "%d %B %Y",
    "%e %B %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%Y/%m/%d",
];

/// Replaces wiki links by their display text: `[[Target|Shown]]` becomes
/// `Shown`, `[[Target]]` becomes `Target`.
pub fn replace_links(text: &str) -> String {
    WIKI_LINK_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            caps.get(2)
                .or_else(|| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        })
        .to_string()
}

/// Removes `[[` and `]]` without touching the link body.
pub fn strip_brackets(text: &str) -> String {
    text.replace("[[", "").replace("]]", "")
}

/// Turns `<br>` variants into newlines.
pub fn normalize_breaks(text: &str) -> String {
    BREAK_REGEX.replace_all(text, "\n").to_string()
}

/// First run of digits in `text`.
pub fn first_integer(text: &str) -> Option<u32> {
    INTEGER_REGEX
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses a date-shaped string (`2019-07-26`, `July 26, 2019`, `26 July 2019`, ...).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    let caps = ISO_DATE_REGEX.captures(text)?;
    NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )
}
