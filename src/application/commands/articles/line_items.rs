// src/application/commands/articles/line_items.rs
use super::{ArticleCommandService, create::LineItemInput};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{LineItem, LineItemPatch, Material},
};

pub struct RemoveLineItemCommand {
    pub article_type: i64,
    pub article_name: String,
    pub material: String,
}

pub struct UpdateLineItemCommand {
    pub article_type: i64,
    pub article_name: String,
    pub material: String,
    pub new_material: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

pub struct UpsertLineItemsCommand {
    pub article_type: i64,
    pub article_name: String,
    pub items: Vec<LineItemInput>,
}

impl ArticleCommandService {
    /// Remove one line item by material and persist the recomputed article.
    pub async fn remove_line_item(
        &self,
        command: RemoveLineItemCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self
            .require_article(command.article_type, &command.article_name)
            .await?;

        article.remove_line_item(&command.material)?;

        self.repo.save(&article).await?;
        Ok(article.into())
    }

    /// Targeted update of a single line item. The aggregate cannot be derived
    /// from the patch alone, so this is a read-recompute-write round trip.
    pub async fn update_line_item(
        &self,
        command: UpdateLineItemCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self
            .require_article(command.article_type, &command.article_name)
            .await?;

        let new_material = command.new_material.map(Material::new).transpose()?;
        article.update_line_item(
            &command.material,
            LineItemPatch {
                new_material,
                quantity: command.quantity,
                unit: command.unit,
                cost: command.cost,
            },
        )?;

        self.repo.save(&article).await?;
        Ok(article.into())
    }

    /// Upsert-by-material over the article's item list. An empty payload is
    /// rejected before any lookup happens.
    pub async fn upsert_line_items(
        &self,
        command: UpsertLineItemsCommand,
    ) -> ApplicationResult<ArticleDto> {
        if command.items.is_empty() {
            return Err(ApplicationError::validation(
                "items must be a non-empty array",
            ));
        }

        let mut article = self
            .require_article(command.article_type, &command.article_name)
            .await?;

        let incoming = command
            .items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        article.upsert_line_items(incoming);

        self.repo.save(&article).await?;
        Ok(article.into())
    }
}
