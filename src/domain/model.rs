use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub type RecipeId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

/// The one record every view and repository shares.
///
/// Records coming from the API may omit `ingredients` or send it as `null`;
/// both deserialize to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<Ingredient>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Ingredient>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Ingredient>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }
}
