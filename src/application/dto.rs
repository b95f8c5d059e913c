// src/application/dto.rs
use crate::domain::article::{Article, LineItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDto {
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

impl From<LineItem> for LineItemDto {
    fn from(item: LineItem) -> Self {
        Self {
            material: item.material.into(),
            quantity: item.quantity,
            unit: item.unit,
            cost: item.cost,
        }
    }
}

/// Wire shape of an article. Field names follow the original API contract
/// (`articleTypeId`, `articleName`, ...), hence the camelCase rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub article_type_id: i64,
    pub article_name: String,
    pub article_type: i64,
    pub items: Vec<LineItemDto>,
    pub total_cost: f64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_type_id: article.id.into(),
            article_name: article.name.into(),
            article_type: article.article_type,
            items: article.items.into_iter().map(Into::into).collect(),
            total_cost: article.total_cost,
        }
    }
}
