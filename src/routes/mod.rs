use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error};
use serde::Serialize;

use crate::services::ServiceError;

pub mod comparisons;
pub mod custom_options;
pub mod objects;

/// JSON envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body returned after a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: String,
}

pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        data: Some(data),
        message: None,
    })
}

pub fn ok_empty() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> {
        success: true,
        data: None,
        message: None,
    })
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()> {
        success: false,
        data: None,
        message: Some(message.into()),
    })
}

/// Map a service error to its HTTP status. Internal failures are logged with
/// `action` and their details are not exposed.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(_) => failure(StatusCode::BAD_REQUEST, err.to_string()),
        ServiceError::NotFound { .. } => failure(StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::AlreadyExists { .. } => failure(StatusCode::CONFLICT, err.to_string()),
        ServiceError::Internal { .. } | ServiceError::PhotoStorage { .. } => {
            log::error!("Failed to {action}: {err}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to {action}"),
            )
        }
    }
}

/// Turns extractor failures (bad JSON body, unparsable query) into a 400 envelope.
pub fn bad_request_handler<E>(err: E, _req: &HttpRequest) -> error::Error
where
    E: std::fmt::Display,
{
    let message = err.to_string();
    error::InternalError::from_response(
        message.clone(),
        failure(StatusCode::BAD_REQUEST, message),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;
    use crate::repository::RepositoryError;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body())
            .await
            .expect("read response body");
        serde_json::from_slice(&bytes).expect("response is json")
    }

    #[actix_web::test]
    async fn maps_error_kinds_to_statuses() {
        let cases = [
            (
                ServiceError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::NotFound { context: "x" },
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::AlreadyExists { context: "x" },
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::Internal {
                    context: "x",
                    source: RepositoryError::Database(diesel::result::Error::NotInTransaction),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(error_response(err, "do work").status(), status);
        }
    }

    #[actix_web::test]
    async fn failure_envelope_omits_data() {
        let body = body_json(failure(StatusCode::NOT_FOUND, "missing")).await;

        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "missing" })
        );
    }

    #[actix_web::test]
    async fn success_envelope_wraps_data() {
        let body = body_json(ok(CreatedId {
            id: "abc".to_string(),
        }))
        .await;

        assert_eq!(
            body,
            serde_json::json!({ "success": true, "data": { "id": "abc" } })
        );
        assert_eq!(
            body_json(ok_empty()).await,
            serde_json::json!({ "success": true })
        );
    }
}
