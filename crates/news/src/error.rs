#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    Network(String),
    Parse(String),
}

impl std::fmt::Display for NewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewsError::Network(msg) => write!(f, "news fetch failed: {msg}"),
            NewsError::Parse(msg) => write!(f, "news response not decodable: {msg}"),
        }
    }
}

impl std::error::Error for NewsError {}
