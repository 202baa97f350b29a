//! Errors surfaced by the browser side of the viewer.

use std::fmt;

/// Why a request to the catalog API did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    NoWindow,
    /// `Request` construction rejected the URL or init
    BadRequest,
    /// `fetch` rejected before a response arrived
    Network(String),
    /// Non-2xx response
    Status(u16),
    BodyUnreadable,
    /// Response or body was not the expected JS type
    NotText,
    /// Body was not valid JSON for the target type
    Decode(String),
    Timeout { after_ms: i32 },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no browser window"),
            Self::BadRequest => write!(f, "could not build request"),
            Self::Network(msg) => write!(f, "network failure: {}", msg),
            Self::Status(code) => write!(f, "server answered {}", code),
            Self::BodyUnreadable => write!(f, "could not read response body"),
            Self::NotText => write!(f, "response body is not text"),
            Self::Decode(msg) => write!(f, "malformed catalog: {}", msg),
            Self::Timeout { after_ms } => write!(f, "no answer after {} ms", after_ms),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(500).to_string(), "server answered 500");
        assert_eq!(
            FetchError::Timeout { after_ms: 10000 }.to_string(),
            "no answer after 10000 ms"
        );
        assert_eq!(
            FetchError::Decode("expected value".into()).to_string(),
            "malformed catalog: expected value"
        );
    }
}
