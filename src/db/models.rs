//! Catalog data model
//!
//! A drink is a title plus a recipe of ingredient parts. Two wire
//! representations exist: the public summary strips ingredient names, the
//! authorized detail keeps everything.

use serde::{Deserialize, Serialize};

/// One recipe component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    /// Public representation: ingredient names withheld.
    pub fn summary(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| IngredientSummary {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }
}

/// Summary form of an ingredient - proportions without the name.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientSummary {
    pub color: String,
    pub parts: u32,
}

/// Summary form of a drink.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkSummary {
    pub id: u64,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

/// POST /drinks body. Both fields are required; absence is a 400, which is
/// why they deserialize as options instead of failing in the extractor.
#[derive(Debug, Deserialize)]
pub struct DrinkCreate {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

/// PATCH /drinks/{id} body. `title` is required, `recipe` may be updated
/// alongside it.
#[derive(Debug, Deserialize)]
pub struct DrinkUpdate {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_strips_ingredient_names() {
        let drink = Drink {
            id: 1,
            title: "Matcha Latte".to_string(),
            recipe: vec![Ingredient {
                name: "matcha".to_string(),
                color: "green".to_string(),
                parts: 1,
            }],
        };

        let value = serde_json::to_value(drink.summary()).unwrap();
        assert_eq!(value["title"], "Matcha Latte");
        assert_eq!(value["recipe"][0]["color"], "green");
        assert!(value["recipe"][0].get("name").is_none());
    }
}
