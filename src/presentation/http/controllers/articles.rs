// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, LineItemInput, RemoveLineItemCommand,
        UpdateLineItemCommand, UpsertLineItemsCommand,
    },
    dto::ArticleDto,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LineItemRequest {
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

impl From<LineItemRequest> for LineItemInput {
    fn from(req: LineItemRequest) -> Self {
        Self {
            material: req.material,
            quantity: req.quantity,
            unit: req.unit,
            cost: req.cost,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub article_name: String,
    pub article_type: i64,
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineItemRequest {
    #[serde(default)]
    pub new_material: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpsertLineItemsRequest {
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) = payload.map_err(HttpError::from)?;
    let command = CreateArticleCommand {
        article_name: payload.article_name,
        article_type: payload.article_type,
        items: payload.items.into_iter().map(Into::into).collect(),
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path((article_type, article_name)): Path<(i64, String)>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand {
            article_type,
            article_name,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn remove_line_item(
    Extension(state): Extension<HttpState>,
    Path((article_type, article_name, material)): Path<(i64, String, String)>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .remove_line_item(RemoveLineItemCommand {
            article_type,
            article_name,
            material,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_line_item(
    Extension(state): Extension<HttpState>,
    Path((article_type, article_name, material)): Path<(i64, String, String)>,
    payload: Result<Json<UpdateLineItemRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Json(payload) = payload.map_err(HttpError::from)?;
    state
        .services
        .article_commands
        .update_line_item(UpdateLineItemCommand {
            article_type,
            article_name,
            material,
            new_material: payload.new_material,
            quantity: payload.quantity,
            unit: payload.unit,
            cost: payload.cost,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn upsert_line_items(
    Extension(state): Extension<HttpState>,
    Path((article_type, article_name)): Path<(i64, String)>,
    payload: Result<Json<UpsertLineItemsRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Json(payload) = payload.map_err(HttpError::from)?;
    state
        .services
        .article_commands
        .upsert_line_items(UpsertLineItemsCommand {
            article_type,
            article_name,
            items: payload.items.into_iter().map(Into::into).collect(),
        })
        .await
        .into_http()
        .map(Json)
}
