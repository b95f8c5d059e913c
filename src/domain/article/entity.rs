// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleName, Material};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// One material entry in an article's cost breakdown. `material` acts as the
/// de-facto key within the parent's item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub material: Material,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

impl LineItem {
    pub fn new(
        material: Material,
        quantity: f64,
        unit: impl Into<String>,
        cost: f64,
    ) -> DomainResult<Self> {
        let unit = unit.into();
        if unit.trim().is_empty() {
            return Err(DomainError::Validation("unit cannot be empty".into()));
        }
        Ok(Self {
            material,
            quantity,
            unit,
            cost,
        })
    }
}

/// Sum of line-item costs. IEEE double addition, no rounding rules.
pub fn total_cost(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.cost).sum()
}

/// The (article_type, article_name) pair all lookup, delete and mutation
/// routes address articles by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleKey {
    pub article_type: i64,
    pub article_name: ArticleName,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub name: ArticleName,
    pub article_type: i64,
    pub items: Vec<LineItem>,
    pub total_cost: f64,
}

/// Replacement values for a single line item addressed by its material.
#[derive(Debug, Clone)]
pub struct LineItemPatch {
    pub new_material: Option<Material>,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
}

impl Article {
    /// Remove the line item whose material matches. Errors when no entry
    /// carries that material; the item list is left untouched in that case.
    pub fn remove_line_item(&mut self, material: &str) -> DomainResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.material.as_str() != material);
        if self.items.len() == before {
            return Err(DomainError::NotFound(format!(
                "material '{material}' not present in article"
            )));
        }
        self.total_cost = total_cost(&self.items);
        Ok(())
    }

    /// Replace the fields of the line item addressed by `material` in place.
    /// The material itself is renamed only when the patch carries a new one.
    pub fn update_line_item(&mut self, material: &str, patch: LineItemPatch) -> DomainResult<()> {
        if patch.unit.trim().is_empty() {
            return Err(DomainError::Validation("unit cannot be empty".into()));
        }

        let entry = self
            .items
            .iter_mut()
            .find(|item| item.material.as_str() == material)
            .ok_or_else(|| {
                DomainError::NotFound(format!("material '{material}' not present in article"))
            })?;

        if let Some(new_material) = patch.new_material {
            entry.material = new_material;
        }
        entry.quantity = patch.quantity;
        entry.unit = patch.unit;
        entry.cost = patch.cost;

        self.total_cost = total_cost(&self.items);
        Ok(())
    }

    /// Upsert-by-material: for each incoming item, drop any existing entry
    /// with the same material, then append the incoming one. Replaced entries
    /// therefore move to the end of the list, in incoming order.
    pub fn upsert_line_items(&mut self, incoming: Vec<LineItem>) {
        for item in incoming {
            self.items
                .retain(|existing| existing.material != item.material);
            self.items.push(item);
        }
        self.total_cost = total_cost(&self.items);
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub article_type: i64,
    pub items: Vec<LineItem>,
    pub total_cost: f64,
}

impl NewArticle {
    /// Build a new article, deriving `total_cost` from the items. Callers
    /// never supply the aggregate directly.
    pub fn new(name: ArticleName, article_type: i64, items: Vec<LineItem>) -> Self {
        let total = total_cost(&items);
        Self {
            name,
            article_type,
            items,
            total_cost: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(material: &str, cost: f64) -> LineItem {
        LineItem::new(Material::new(material).unwrap(), 1.0, "kg", cost).unwrap()
    }

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            name: ArticleName::new("Chair").unwrap(),
            article_type: 1,
            items: vec![item("Wood", 10.0), item("Screws", 2.0)],
            total_cost: 12.0,
        }
    }

    #[test]
    fn total_cost_sums_item_costs() {
        let items = vec![item("Wood", 10.0), item("Screws", 2.0)];
        assert_eq!(total_cost(&items), 12.0);
        assert_eq!(total_cost(&[]), 0.0);
    }

    #[test]
    fn new_article_derives_total() {
        let article = NewArticle::new(
            ArticleName::new("Chair").unwrap(),
            1,
            vec![item("Wood", 10.0), item("Screws", 2.0)],
        );
        assert_eq!(article.total_cost, 12.0);
    }

    #[test]
    fn remove_line_item_recomputes_total() {
        let mut article = sample_article();
        article.remove_line_item("Wood").unwrap();
        assert_eq!(article.items.len(), 1);
        assert_eq!(article.total_cost, 2.0);
    }

    #[test]
    fn remove_unknown_material_is_not_found() {
        let mut article = sample_article();
        let err = article.remove_line_item("Glue").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(article.items.len(), 2);
    }

    #[test]
    fn update_line_item_replaces_fields_and_recomputes() {
        let mut article = sample_article();
        article
            .update_line_item(
                "Wood",
                LineItemPatch {
                    new_material: Some(Material::new("Oak").unwrap()),
                    quantity: 3.0,
                    unit: "kg".into(),
                    cost: 15.0,
                },
            )
            .unwrap();

        let entry = &article.items[0];
        assert_eq!(entry.material.as_str(), "Oak");
        assert_eq!(entry.quantity, 3.0);
        assert_eq!(entry.cost, 15.0);
        assert_eq!(article.total_cost, 17.0);
    }

    #[test]
    fn update_keeps_material_when_no_rename_given() {
        let mut article = sample_article();
        article
            .update_line_item(
                "Screws",
                LineItemPatch {
                    new_material: None,
                    quantity: 8.0,
                    unit: "pcs".into(),
                    cost: 4.0,
                },
            )
            .unwrap();
        assert_eq!(article.items[1].material.as_str(), "Screws");
        assert_eq!(article.total_cost, 14.0);
    }

    #[test]
    fn upsert_replaces_matching_material_at_end() {
        let mut article = sample_article();
        article.upsert_line_items(vec![item("Wood", 20.0), item("Glue", 5.0)]);

        let materials: Vec<&str> = article
            .items
            .iter()
            .map(|item| item.material.as_str())
            .collect();
        assert_eq!(materials, vec!["Screws", "Wood", "Glue"]);
        assert_eq!(article.total_cost, 27.0);
    }
}
