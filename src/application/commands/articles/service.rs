// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{ArticleKey, ArticleName, ArticleRepository};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::Article,
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    /// Resolve the (type, name) pair every mutation route addresses an
    /// article by, failing with NotFound when nothing matches.
    pub(super) async fn require_article(
        &self,
        article_type: i64,
        article_name: &str,
    ) -> ApplicationResult<Article> {
        let key = ArticleKey {
            article_type,
            article_name: ArticleName::new(article_name)?,
        };
        self.repo
            .find_by_key(&key)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
