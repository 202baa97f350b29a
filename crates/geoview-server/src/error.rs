//! API errors and their HTTP mapping.
//!
//! Every variant renders as `{"error": "<message>"}` with the status code
//! the viewer expects. The messages are part of the wire contract.

use std::io;

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// `path` query parameter absent or empty
    #[error("Path parameter is required")]
    MissingPath,
    /// Requested path resolves outside the catalog root
    #[error("Invalid path")]
    PathOutsideRoot,
    /// Requested file is not `.geojson` / `.json`
    #[error("Invalid file type")]
    InvalidFileType,
    #[error("File not found")]
    FileNotFound,
    /// Parsed document's `type` is not an accepted GeoJSON container
    #[error("Invalid GeoJSON format")]
    InvalidGeoJson,
    #[error("Error reading file")]
    ReadFile(#[source] io::Error),
    #[error("Error reading file")]
    ParseFile(#[source] serde_json::Error),
    /// Catalog directory exists but could not be listed
    #[error("Internal Server Error")]
    ListLayers(#[source] io::Error),
    /// Blocking worker was cancelled
    #[error("Internal Server Error")]
    Worker,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPath | Self::InvalidGeoJson => StatusCode::BAD_REQUEST,
            Self::PathOutsideRoot | Self::InvalidFileType => StatusCode::FORBIDDEN,
            Self::FileNotFound => StatusCode::NOT_FOUND,
            Self::ReadFile(_) | Self::ParseFile(_) | Self::ListLayers(_) | Self::Worker => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            match std::error::Error::source(self) {
                Some(source) => error!(%source, "{self}"),
                None => error!("{self}"),
            }
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<BlockingError> for ApiError {
    fn from(_: BlockingError) -> Self {
        Self::Worker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingPath.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PathOutsideRoot.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::InvalidFileType.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::FileNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidGeoJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ReadFile(io::Error::other("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(ApiError::MissingPath.to_string(), "Path parameter is required");
        assert_eq!(ApiError::PathOutsideRoot.to_string(), "Invalid path");
        assert_eq!(
            ApiError::ListLayers(io::Error::other("denied")).to_string(),
            "Internal Server Error"
        );
    }
}
