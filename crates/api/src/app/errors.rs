use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use boxoffice_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidPurchase(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_purchase", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
