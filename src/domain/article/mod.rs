pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleKey, LineItem, LineItemPatch, NewArticle, total_cost};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleName, Material};
