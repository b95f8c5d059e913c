// src/infrastructure/repositories/sqlite_article.rs
use crate::domain::article::{
    Article, ArticleId, ArticleKey, ArticleName, ArticleRepository, LineItem, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_type_id: i64,
    article_name: String,
    article_type: i64,
    items: String,
    total_cost: f64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let items: Vec<LineItem> = serde_json::from_str(&row.items)
            .map_err(|err| DomainError::Persistence(format!("corrupt items column: {err}")))?;
        Ok(Article {
            id: ArticleId::new(row.article_type_id)?,
            name: ArticleName::new(row.article_name)?,
            article_type: row.article_type,
            items,
            total_cost: row.total_cost,
        })
    }
}

fn encode_items(items: &[LineItem]) -> DomainResult<String> {
    serde_json::to_string(items)
        .map_err(|err| DomainError::Persistence(format!("failed to encode items: {err}")))
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT article_type_id, article_name, article_type, items, total_cost
             FROM articles ORDER BY article_type_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_key(&self, key: &ArticleKey) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT article_type_id, article_name, article_type, items, total_cost
             FROM articles WHERE article_type = ? AND article_name = ?",
        )
        .bind(key.article_type)
        .bind(key.article_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn count_by_name(&self, name: &ArticleName) -> DomainResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE article_name = ?")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_error)?;

        Ok(count.max(0) as u64)
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let items = encode_items(&article.items)?;

        // article_type_id comes from AUTOINCREMENT, so ids are strictly
        // increasing and never reused across deletes.
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (article_name, article_type, items, total_cost)
             VALUES (?, ?, ?, ?)
             RETURNING article_type_id, article_name, article_type, items, total_cost",
        )
        .bind(article.name.as_str())
        .bind(article.article_type)
        .bind(items)
        .bind(article.total_cost)
        .fetch_one(&self.pool)
        .await
        .map_err(map_error)?;

        Article::try_from(row)
    }

    async fn delete_by_key(&self, key: &ArticleKey) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "DELETE FROM articles WHERE article_type = ? AND article_name = ?
             RETURNING article_type_id, article_name, article_type, items, total_cost",
        )
        .bind(key.article_type)
        .bind(key.article_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn save(&self, article: &Article) -> DomainResult<()> {
        let items = encode_items(&article.items)?;

        let result = sqlx::query(
            "UPDATE articles
             SET article_name = ?, article_type = ?, items = ?, total_cost = ?
             WHERE article_type_id = ?",
        )
        .bind(article.name.as_str())
        .bind(article.article_type)
        .bind(items)
        .bind(article.total_cost)
        .bind(i64::from(article.id))
        .execute(&self.pool)
        .await
        .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article no longer exists".into()));
        }
        Ok(())
    }
}
