/// Fixed request parameters for the news aggregation API.
pub const TIMESPAN: &str = "24h";
pub const FORMAT: &str = "json";
pub const MAX_RECORDS: u32 = 50;

/// Query for recent headlines about one town.
///
/// The phrase is always the exact quoted `"<TownName>, Connecticut"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    town: String,
}

impl NewsQuery {
    pub fn for_town(town: impl Into<String>) -> Self {
        Self { town: town.into() }
    }

    pub fn phrase(&self) -> String {
        format!("\"{}, Connecticut\"", self.town)
    }

    /// Canonical query string, byte-exact:
    /// `query="<Town>, Connecticut"&timespan=24h&format=json&maxrecords=50`.
    ///
    /// Quotes and spaces are left literal here; the HTTP client
    /// percent-encodes them when the URL is parsed.
    pub fn canonical_query(&self) -> String {
        format!(
            "query={}&timespan={TIMESPAN}&format={FORMAT}&maxrecords={MAX_RECORDS}",
            self.phrase()
        )
    }

    pub fn request_url(&self, base: &str) -> String {
        format!("{}?{}", base.trim_end_matches('?'), self.canonical_query())
    }
}

#[cfg(test)]
mod tests {
    use super::NewsQuery;

    #[test]
    fn canonical_query_matches_expected_bytes() {
        let q = NewsQuery::for_town("New Haven");
        assert_eq!(
            q.canonical_query(),
            r#"query="New Haven, Connecticut"&timespan=24h&format=json&maxrecords=50"#
        );
    }

    #[test]
    fn request_url_appends_query_once() {
        let q = NewsQuery::for_town("Kent");
        let url = q.request_url("https://api.example.org/v2/doc/doc");
        assert_eq!(
            url,
            r#"https://api.example.org/v2/doc/doc?query="Kent, Connecticut"&timespan=24h&format=json&maxrecords=50"#
        );

        let url = q.request_url("https://api.example.org/v2/doc/doc?");
        assert!(!url.contains("??"));
    }
}
