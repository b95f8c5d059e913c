use crate::domain::article::entity::{Article, ArticleKey, NewArticle};
use crate::domain::article::value_objects::ArticleName;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Document-store contract the handlers compose against. Each call is a
/// single-document operation; there is no multi-document atomicity.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_key(&self, key: &ArticleKey) -> DomainResult<Option<Article>>;
    async fn count_by_name(&self, name: &ArticleName) -> DomainResult<u64>;
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn delete_by_key(&self, key: &ArticleKey) -> DomainResult<Option<Article>>;
    /// Persist the full document state after an in-memory mutation.
    async fn save(&self, article: &Article) -> DomainResult<()>;
}
