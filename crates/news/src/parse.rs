use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::NewsError;

/// Wire timestamp shape, e.g. `20240517T134500Z`.
const SEEN_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// One article-like record from the aggregation API. Derived per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub url: String,
    pub title: Option<String>,
    pub seen: Option<DateTime<Utc>>,
}

/// Decodes the aggregation API's response envelope.
///
/// The response schema is not fully fixed: the article array may sit
/// under `articles` or `Articles`, and each record's fields under the
/// lowercase (`url`/`title`/`seendate`) or capitalized
/// (`URL`/`Title`/`SeenDate`) convention. Both shapes decode
/// identically. Records without a url are skipped; order is preserved.
pub fn parse_headlines(text: &str) -> Result<Vec<Headline>, NewsError> {
    let doc: Value = serde_json::from_str(text).map_err(|e| NewsError::Parse(e.to_string()))?;

    let records = field(&doc, "articles", "Articles")
        .and_then(Value::as_array)
        .ok_or_else(|| NewsError::Parse("no article array in envelope".into()))?;

    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let Some(url) = field(record, "url", "URL").and_then(Value::as_str) else {
            continue;
        };
        let title = field(record, "title", "Title")
            .and_then(Value::as_str)
            .map(str::to_string);
        let seen = field(record, "seendate", "SeenDate")
            .and_then(Value::as_str)
            .and_then(parse_seen);

        out.push(Headline {
            url: url.to_string(),
            title,
            seen,
        });
    }
    Ok(out)
}

fn field<'a>(value: &'a Value, lower: &str, upper: &str) -> Option<&'a Value> {
    value.get(lower).or_else(|| value.get(upper))
}

/// Unparsable timestamps are treated as absent, not as errors.
fn parse_seen(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, SEEN_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::parse_headlines;
    use crate::error::NewsError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_lowercase_records() {
        let body = r#"{"articles":[
            {"url":"https://a.example/1","title":"First","seendate":"20240517T134500Z"},
            {"url":"https://a.example/2"}
        ]}"#;
        let items = parse_headlines(body).expect("parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("First"));
        assert_eq!(
            items[0].seen,
            Some(Utc.with_ymd_and_hms(2024, 5, 17, 13, 45, 0).unwrap())
        );
        assert_eq!(items[1].title, None);
        assert_eq!(items[1].seen, None);
    }

    #[test]
    fn alternate_field_naming_decodes_identically() {
        let lower = r#"{"articles":[
            {"url":"https://a.example/x","title":"Same","seendate":"20240102T000000Z"}]}"#;
        let upper = r#"{"Articles":[
            {"URL":"https://a.example/x","Title":"Same","SeenDate":"20240102T000000Z"}]}"#;
        assert_eq!(
            parse_headlines(lower).unwrap(),
            parse_headlines(upper).unwrap()
        );
    }

    #[test]
    fn records_without_url_are_skipped_in_order() {
        let body = r#"{"articles":[
            {"url":"https://a.example/1","title":"One"},
            {"title":"no link"},
            {"url":"https://a.example/2","title":"Two"}
        ]}"#;
        let items = parse_headlines(body).unwrap();
        let urls: Vec<&str> = items.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example/1", "https://a.example/2"]);
    }

    #[test]
    fn bad_timestamp_becomes_absent() {
        let body = r#"{"articles":[{"url":"https://a.example/1","seendate":"yesterday"}]}"#;
        assert_eq!(parse_headlines(body).unwrap()[0].seen, None);
    }

    #[test]
    fn missing_envelope_and_bad_json_are_parse_errors() {
        assert!(matches!(
            parse_headlines(r#"{"items":[]}"#),
            Err(NewsError::Parse(_))
        ));
        assert!(matches!(parse_headlines("<html>"), Err(NewsError::Parse(_))));
    }

    #[test]
    fn empty_envelope_is_zero_records() {
        assert!(parse_headlines(r#"{"articles":[]}"#).unwrap().is_empty());
    }
}
