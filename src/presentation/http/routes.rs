// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the CORS layer from the configured origin allow-list. Origins that
/// fail header-value parsing are dropped with a warning rather than aborting
/// startup.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/aura",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/aura/eliminarArticulo/{article_type}/{article_name}",
            delete(articles::delete_article),
        )
        .route(
            "/aura/eliminarItem/{article_type}/{article_name}/{material}",
            delete(articles::remove_line_item),
        )
        .route(
            "/aura/{article_type}/{article_name}",
            put(articles::upsert_line_items),
        )
        .route(
            "/aura/{article_type}/{article_name}/{material}",
            put(articles::update_line_item),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
