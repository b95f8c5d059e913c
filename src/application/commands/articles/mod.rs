// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod line_items;
mod service;

pub use create::{CreateArticleCommand, LineItemInput};
pub use delete::DeleteArticleCommand;
pub use line_items::{RemoveLineItemCommand, UpdateLineItemCommand, UpsertLineItemsCommand};
pub use service::ArticleCommandService;
