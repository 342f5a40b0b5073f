use serde::Serialize;

/// Registry home page; the destination is fixed, only the label names
/// the town.
pub const REGISTRY_URL: &str = "https://sor.ct.gov/";

/// Search-engine query URL prefix for the police-site search.
pub const SEARCH_URL_TEMPLATE: &str = "https://www.google.com/search?q=";

const POLICE_SUFFIX: &str = "CT police";

/// The two outbound links for a selected town. Labels always reflect the
/// current selection; both open out-of-app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TownLinks {
    pub registry_label: String,
    pub registry_url: String,
    pub police_label: String,
    pub police_url: String,
}

impl TownLinks {
    pub fn for_town(town: &str) -> Self {
        Self {
            registry_label: format!("Search the CT sex-offender registry for {town}"),
            registry_url: REGISTRY_URL.to_string(),
            police_label: format!("Find the {town} police department"),
            police_url: police_search_url(town),
        }
    }
}

/// Plain interpolation only: spaces join with `+`, no other encoding.
fn police_search_url(town: &str) -> String {
    let terms = format!("{town} {POLICE_SUFFIX}").replace(' ', "+");
    format!("{SEARCH_URL_TEMPLATE}{terms}")
}

#[cfg(test)]
mod tests {
    use super::{REGISTRY_URL, TownLinks};

    #[test]
    fn labels_name_the_town() {
        let links = TownLinks::for_town("New Haven");
        assert!(links.registry_label.contains("New Haven"));
        assert!(links.police_label.contains("New Haven"));
        assert_eq!(links.registry_url, REGISTRY_URL);
    }

    #[test]
    fn police_search_joins_terms_with_plus() {
        let links = TownLinks::for_town("New Haven");
        assert_eq!(
            links.police_url,
            "https://www.google.com/search?q=New+Haven+CT+police"
        );

        let links = TownLinks::for_town("Kent");
        assert_eq!(links.police_url, "https://www.google.com/search?q=Kent+CT+police");
    }
}
