use crate::document::Document;

/// How the plot summary was obtained, so callers can tell a missing lead
/// apart from an empty one or from a whole-section fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotSummary {
    NoLeadSection,
    Empty,
    /// First non-blank paragraph of the lead section.
    FirstParagraph(String),
    /// The parser produced no paragraphs; the whole lead text is used.
    LeadText(String),
}

impl PlotSummary {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::FirstParagraph(text) | Self::LeadText(text) => Some(text),
            Self::NoLeadSection | Self::Empty => None,
        }
    }
}

pub fn extract_plot_summary(doc: &Document) -> PlotSummary {
    let Some(lead) = doc.lead() else {
        return PlotSummary::NoLeadSection;
    };

    if let Some(paragraph) = lead
        .paragraphs
        .iter()
        .map(|p| p.trim())
        .find(|p| !p.is_empty())
    {
        return PlotSummary::FirstParagraph(paragraph.to_string());
    }

    match lead.text.trim() {
        "" => PlotSummary::Empty,
        text => PlotSummary::LeadText(text.to_string()),
    }
}
