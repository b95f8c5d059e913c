// src/application/services.rs
use std::sync::Arc;

use crate::{
    application::{commands::articles::ArticleCommandService, queries::articles::ArticleQueryService},
    domain::article::ArticleRepository,
};

/// Bundle of application services the HTTP layer dispatches into. The
/// repository handle is constructed once at bootstrap and passed in
/// explicitly; there is no ambient connection state.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(article_repo));

        Self {
            article_commands,
            article_queries,
        }
    }
}
