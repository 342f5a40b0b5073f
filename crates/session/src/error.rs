/// Application-level error taxonomy. Every variant is user-surfaceable;
/// none aborts the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    Parse(String),
    GeolocationUnsupported,
    GeolocationDenied,
    GeolocationTimeout,
    NoContainingTown,
    UnknownTown(String),
}

impl AppError {
    /// Stable taxonomy name for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Network(_) => "network",
            AppError::Parse(_) => "parse",
            AppError::GeolocationUnsupported => "geolocation_unsupported",
            AppError::GeolocationDenied => "geolocation_denied",
            AppError::GeolocationTimeout => "geolocation_timeout",
            AppError::NoContainingTown => "no_containing_town",
            AppError::UnknownTown(_) => "unknown_town",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "network request failed: {msg}"),
            AppError::Parse(msg) => write!(f, "response not decodable: {msg}"),
            AppError::GeolocationUnsupported => {
                write!(f, "this device does not support geolocation")
            }
            AppError::GeolocationDenied => write!(f, "location permission was denied"),
            AppError::GeolocationTimeout => write!(f, "location request timed out"),
            AppError::NoContainingTown => {
                write!(f, "your location is not inside a Connecticut town")
            }
            AppError::UnknownTown(name) => write!(f, "no town named {name:?}"),
        }
    }
}

impl std::error::Error for AppError {}
