use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(attempt_purchase))
}

pub async fn attempt_purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PurchaseRequestBody>,
) -> axum::response::Response {
    let requests = body.ticket_requests();

    match services
        .purchases
        .attempt_purchase(body.account_id(), &requests)
    {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
