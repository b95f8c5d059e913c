// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleKey, ArticleName},
};

pub struct DeleteArticleCommand {
    pub article_type: i64,
    pub article_name: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let key = ArticleKey {
            article_type: command.article_type,
            article_name: ArticleName::new(command.article_name)?,
        };

        let deleted = self
            .repo
            .delete_by_key(&key)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(deleted.into())
    }
}
