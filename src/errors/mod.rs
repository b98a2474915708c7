use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendingError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid source descriptor: {0}")]
    InvalidSource(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used when a single source fails during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    MalformedResponse,
    EmptyResult,
    Other,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::MalformedResponse => "malformed-response",
            FailureKind::EmptyResult => "empty-result",
            FailureKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TrendingError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            TrendingError::Http(e) if e.is_decode() => FailureKind::MalformedResponse,
            TrendingError::Http(_) | TrendingError::HttpStatus { .. } => FailureKind::Network,
            TrendingError::FeedParse(_) | TrendingError::Json(_) => {
                FailureKind::MalformedResponse
            }
            _ => FailureKind::Other,
        }
    }
}

pub type TrendingResult<T> = Result<T, TrendingError>;
