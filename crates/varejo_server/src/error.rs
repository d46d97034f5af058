//! Repository-result to HTTP-response mapping.
//!
//! # Responsibility
//! - Translate core errors into status codes and a JSON error body.
//!
//! # Invariants
//! - Validation maps to 400, missing records to 404, storage failures
//!   to 500; nothing else leaks out of the shell.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use varejo_core::{EntityKind, RepoError};

/// HTTP-facing error: a status code plus a client-readable message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Not-found answer for a search that matched nothing, for resources
    /// whose contract treats an empty result as an error.
    pub fn no_search_matches(entity: EntityKind) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("no {} matched the search", entity.singular()),
        }
    }

    /// Answer for a search route on a resource without search
    /// configuration. Routing never exposes such a route; this guards the
    /// handler anyway.
    pub fn search_unsupported(entity: EntityKind) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("search is not supported for {}", entity.key()),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        let status = match &err {
            RepoError::Validation(_) => StatusCode::BAD_REQUEST,
            RepoError::NotFound { .. } => StatusCode::NOT_FOUND,
            RepoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use varejo_core::{EntityKind, RecordValidationError, RepoError};

    #[test]
    fn validation_maps_to_bad_request_and_names_fields() {
        let err = ApiError::from(RepoError::Validation(
            RecordValidationError::MissingFields(vec!["total_amount".to_string()]),
        ));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("total_amount"));
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let err = ApiError::from(RepoError::NotFound {
            entity: EntityKind::Stores,
            id: "x".to_string(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains("store"));
    }

    #[test]
    fn empty_search_policy_answers_not_found() {
        let err = ApiError::no_search_matches(EntityKind::Orders);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
