//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use roster_store::StoreError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The requested hero does not exist.
    #[error("Hero not found")]
    HeroNotFound,

    /// The requested power does not exist.
    #[error("Power not found")]
    PowerNotFound,

    /// One or more request fields are missing or invalid.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    /// An error propagated from the store layer.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::HeroNotFound | Self::PowerNotFound => {
                (StatusCode::NOT_FOUND, Json(json!({"error": self.to_string()}))).into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response()
            }
            // A broken reference is the caller's mistake; everything else
            // from the store is an infrastructure fault.
            Self::Store(err @ (StoreError::UnknownHero(_) | StoreError::UnknownPower(_))) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": [err.to_string()]})))
                    .into_response()
            }
            Self::Store(err) => {
                tracing::error!(error = %err, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": err.to_string()})))
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{HeroId, PowerId};

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(GatewayError::HeroNotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(GatewayError::PowerNotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = GatewayError::Validation(vec!["strength is required".to_owned()]);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn broken_references_map_to_400() {
        let hero = GatewayError::Store(StoreError::UnknownHero(HeroId(9)));
        assert_eq!(hero.into_response().status(), StatusCode::BAD_REQUEST);

        let power = GatewayError::Store(StoreError::UnknownPower(PowerId(9)));
        assert_eq!(power.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_store_errors_map_to_500() {
        let err = GatewayError::Store(StoreError::Database(sqlx::Error::PoolClosed));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_display_matches_response_contract() {
        assert_eq!(GatewayError::HeroNotFound.to_string(), "Hero not found");
        assert_eq!(GatewayError::PowerNotFound.to_string(), "Power not found");
    }
}
