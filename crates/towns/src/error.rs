#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TownsError {
    Parse(String),
    MissingId,
    MissingName,
    DuplicateId(u64),
    DuplicateName(String),
    Geometry(String),
    Empty,
}

impl std::fmt::Display for TownsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TownsError::Parse(msg) => write!(f, "boundary data not decodable: {msg}"),
            TownsError::MissingId => write!(f, "feature has no numeric id"),
            TownsError::MissingName => write!(f, "feature has no name property"),
            TownsError::DuplicateId(id) => write!(f, "duplicate town id {id}"),
            TownsError::DuplicateName(name) => write!(f, "duplicate town name {name:?}"),
            TownsError::Geometry(msg) => write!(f, "unsupported town geometry: {msg}"),
            TownsError::Empty => write!(f, "boundary data contains no towns"),
        }
    }
}

impl std::error::Error for TownsError {}
