use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info, warn};

use crate::application::DispatchOutcome;
use crate::connector::api::Container;
use crate::domain::{DomainError, PromptRequest};

/// What callers see when the upstream chat service fails. The structured
/// error alongside it carries the real status code and reason.
pub const FALLBACK_MESSAGE: &str = "Cannot handle this prompt for the moment, please try again";

/// `POST /api/prompt` — the dispatcher.
///
/// Success bodies are either the sorted helper listing or the reply object;
/// failures are `{error: {kind, detail}}` with a meaningful status code.
pub async fn handle_prompt(
    State(container): State<Arc<Container>>,
    Json(request): Json<PromptRequest>,
) -> Response {
    info!(
        name = request.name.as_deref().unwrap_or(""),
        "prompt request received"
    );

    let use_case = match container.dispatch_use_case().await {
        Ok(use_case) => use_case,
        Err(e) => return render_error(&e),
    };

    match use_case.execute(&request).await {
        Ok(DispatchOutcome::Helpers(choices)) => Json(choices).into_response(),
        Ok(DispatchOutcome::Reply(reply)) => {
            info!("{}", reply.text());
            Json(reply).into_response()
        }
        Err(e) => render_error(&e),
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "promptrelay",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn render_error(error: &DomainError) -> Response {
    warn!("{error}");

    let status = match error {
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::ChatApi { .. } | DomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
        DomainError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Upstream HTTP failures keep the original "<status> <reason>" shape in
    // the detail field.
    let detail = match error {
        DomainError::ChatApi {
            status,
            status_text,
        } => format!("{status} {status_text}"),
        other => other.to_string(),
    };

    let mut body = json!({
        "error": { "kind": error.kind(), "detail": detail },
    });
    if error.is_upstream_failure() {
        body["message"] = json!(FALLBACK_MESSAGE);
    }

    (status, Json(body)).into_response()
}
