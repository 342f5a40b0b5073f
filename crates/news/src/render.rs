use serde::Serialize;

use crate::parse::Headline;

/// Cap on rendered headlines; extra records are dropped, never reordered.
pub const MAX_RENDERED: usize = 20;

const UNTITLED: &str = "(untitled)";
const WHEN_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One rendered headline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Formatted timestamp, empty when the record carried none.
    pub when: String,
    pub title: String,
    pub url: String,
}

/// What the news region shows. Replaced wholesale on every selection
/// change or fetch completion; empty and failed states are explicit
/// placeholders, never a silently empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NewsView {
    Headlines { entries: Vec<Entry> },
    Empty { message: String },
    Unavailable { message: String },
}

impl NewsView {
    pub fn empty() -> Self {
        NewsView::Empty {
            message: "No headlines for this town in the last 24 hours.".to_string(),
        }
    }

    pub fn unavailable() -> Self {
        NewsView::Unavailable {
            message: "Could not load headlines.".to_string(),
        }
    }
}

/// Renders up to `MAX_RENDERED` headlines in their received order.
pub fn render(headlines: &[Headline]) -> NewsView {
    if headlines.is_empty() {
        return NewsView::empty();
    }

    let entries = headlines
        .iter()
        .take(MAX_RENDERED)
        .map(|h| Entry {
            when: h
                .seen
                .map(|dt| dt.format(WHEN_FORMAT).to_string())
                .unwrap_or_default(),
            title: h.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            url: h.url.clone(),
        })
        .collect();

    NewsView::Headlines { entries }
}

#[cfg(test)]
mod tests {
    use super::{MAX_RENDERED, NewsView, render};
    use crate::parse::Headline;
    use chrono::{TimeZone, Utc};

    fn headline(n: usize) -> Headline {
        Headline {
            url: format!("https://a.example/{n}"),
            title: Some(format!("Story {n}")),
            seen: None,
        }
    }

    #[test]
    fn zero_records_render_explicit_placeholder() {
        match render(&[]) {
            NewsView::Empty { message } => assert!(!message.is_empty()),
            other => panic!("expected empty placeholder, got {other:?}"),
        }
    }

    #[test]
    fn caps_at_first_twenty_in_received_order() {
        let items: Vec<Headline> = (0..30).map(headline).collect();
        let NewsView::Headlines { entries } = render(&items) else {
            panic!("expected headlines");
        };
        assert_eq!(entries.len(), MAX_RENDERED);
        assert_eq!(entries[0].url, "https://a.example/0");
        assert_eq!(entries[19].url, "https://a.example/19");
    }

    #[test]
    fn missing_title_and_date_fall_back() {
        let item = Headline {
            url: "https://a.example/x".to_string(),
            title: None,
            seen: None,
        };
        let NewsView::Headlines { entries } = render(&[item]) else {
            panic!("expected headlines");
        };
        assert_eq!(entries[0].title, "(untitled)");
        assert_eq!(entries[0].when, "");
    }

    #[test]
    fn timestamp_is_formatted() {
        let item = Headline {
            url: "https://a.example/x".to_string(),
            title: Some("T".to_string()),
            seen: Some(Utc.with_ymd_and_hms(2024, 5, 17, 13, 45, 0).unwrap()),
        };
        let NewsView::Headlines { entries } = render(&[item]) else {
            panic!("expected headlines");
        };
        assert_eq!(entries[0].when, "2024-05-17 13:45");
    }
}
