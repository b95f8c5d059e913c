// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleRepository,
};

pub struct ArticleQueryService {
    repo: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.find_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
