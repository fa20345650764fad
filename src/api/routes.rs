use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::info;

use crate::error::{Result, AppError};
use crate::api::models::{EventsResponse, ExtractRequest, Post, SearchRequest};
use crate::events::parse_events;
use crate::llm::call_openrouter;
use crate::pipeline::search_site;
use crate::sites::{Dongduk, Kangnam, NoticeSite};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/dongduk-notice/", post(dongduk_handler))
        .route("/kangnam-notice/", post(kangnam_handler))
        .route("/extract_events/", post(extract_events_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn dongduk_handler(Json(req): Json<SearchRequest>) -> Result<Json<Vec<Post>>> {
    notice_handler(&Dongduk, req).await
}

async fn kangnam_handler(Json(req): Json<SearchRequest>) -> Result<Json<Vec<Post>>> {
    notice_handler(&Kangnam, req).await
}

async fn notice_handler(site: &dyn NoticeSite, req: SearchRequest) -> Result<Json<Vec<Post>>> {
    if req.keyword.trim().is_empty() {
        return Err(AppError::InvalidRequest("keyword cannot be empty".to_string()));
    }

    info!(
        site = site.name(),
        keyword = %req.keyword,
        start_date = %req.start_date,
        "notice search requested"
    );

    let outcome = search_site(site, &req.keyword, req.start_date).await?;

    info!(
        site = site.name(),
        count = outcome.posts.len(),
        dropped = outcome.dropped,
        "notice search completed"
    );
    Ok(Json(outcome.posts))
}

async fn extract_events_handler(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<EventsResponse>> {
    if req.text.trim().is_empty() {
        return Err(AppError::InvalidRequest("text cannot be empty".to_string()));
    }

    info!(chars = req.text.len(), "event extraction requested");

    let reply = call_openrouter(&state.config.openrouter_api_key, &req.text).await?;
    let events = parse_events(&reply)?;

    info!(count = events.len(), "event extraction completed");
    Ok(Json(EventsResponse { events }))
}
