use std::collections::HashMap;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header::LOCATION, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::artifacts::resolve_artifact_url;
use crate::circleci::CircleCiError;
use crate::models::RedirectParams;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", any(healthcheck))
        .fallback(redirect_to_artifact)
}

/// Routes with request tracing, ready to serve
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Span for an inbound request. The query string carries the token and is left out.
fn request_span(request: &Request<Body>) -> Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}

/// ANY /healthcheck
async fn healthcheck() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// ANY /*?project=&token=[&filename=]
/// Redirect to an artifact of the project's latest successful build
async fn redirect_to_artifact(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let params = RedirectParams::from(query);

    let Some(project) = params.project() else {
        tracing::warn!("Rejecting request without project");
        return (StatusCode::BAD_REQUEST, "No 'project' query parameter supplied").into_response();
    };

    let Some(token) = params.token() else {
        tracing::warn!("Rejecting request for {} without token", project);
        return (StatusCode::BAD_REQUEST, "No 'token' query parameter supplied").into_response();
    };

    let location = resolve_artifact_url(&state.circleci, project, token, params.filename())
        .await
        .and_then(location_header);

    match location {
        Ok(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::error!("Failed to resolve artifact for {}: {}", project, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error parsing circleci response: {}", e),
            )
                .into_response()
        }
    }
}

fn location_header(url: String) -> Result<HeaderValue, CircleCiError> {
    HeaderValue::try_from(url.as_str()).map_err(|_| CircleCiError::InvalidArtifactUrl(url))
}
