use reqwest::StatusCode;
use thiserror::Error;

/// Failures reported while fetching questions from OpenTDB
///
/// The first group mirrors the API's `response_code` field; the rest cover
/// transport and decoding problems.
#[derive(Debug, Error)]
pub enum TriviaApiError {
    #[error("not enough questions available for this difficulty and category")]
    NoResults,

    #[error("the trivia API rejected the request parameters")]
    InvalidParameter,

    #[error("session token not found")]
    TokenNotFound,

    #[error("session token has returned every available question")]
    TokenEmpty,

    #[error("too many requests; the trivia API allows one request every 5 seconds")]
    RateLimited,

    #[error("unknown trivia API response code {0}")]
    UnknownCode(u8),

    #[error("trivia API returned HTTP {0}")]
    Status(StatusCode),

    #[error("request to trivia API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid trivia API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TriviaApiError {
    /// Map an OpenTDB `response_code` to an error; `None` means success
    pub fn from_response_code(code: u8) -> Option<Self> {
        match code {
            0 => None,
            1 => Some(Self::NoResults),
            2 => Some(Self::InvalidParameter),
            3 => Some(Self::TokenNotFound),
            4 => Some(Self::TokenEmpty),
            5 => Some(Self::RateLimited),
            other => Some(Self::UnknownCode(other)),
        }
    }

    /// Whether repeating the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited | Self::Http(_) => true,
            Self::Status(status) => status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS,
            _ => false,
        }
    }
}
