// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleName, LineItem, Material, NewArticle},
};

/// Raw line-item fields as they arrive on the wire, before value-object
/// validation.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    pub material: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = ApplicationError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        let material = Material::new(input.material)?;
        Ok(LineItem::new(
            material,
            input.quantity,
            input.unit,
            input.cost,
        )?)
    }
}

pub struct CreateArticleCommand {
    pub article_name: String,
    pub article_type: i64,
    pub items: Vec<LineItemInput>,
}

impl ArticleCommandService {
    /// Create an article. Name uniqueness is a check-then-insert, so two
    /// concurrent creates with the same name can both pass the count check;
    /// the sequential case reliably fails with a validation error.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let name = ArticleName::new(command.article_name)?;

        let existing = self.repo.count_by_name(&name).await?;
        if existing > 0 {
            return Err(ApplicationError::validation(format!(
                "an article named '{name}' already exists"
            )));
        }

        let items = command
            .items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let created = self
            .repo
            .insert(NewArticle::new(name, command.article_type, items))
            .await?;
        Ok(created.into())
    }
}
