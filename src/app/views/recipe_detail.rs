use crate::domain::model::Recipe;

/// Display fragment for a recipe handed in by reference. Renders nothing when
/// there is no recipe.
pub struct RecipeDetail<'a> {
    recipe: Option<&'a Recipe>,
}

impl<'a> RecipeDetail<'a> {
    pub fn new(recipe: Option<&'a Recipe>) -> Self {
        Self { recipe }
    }

    pub fn render(&self) -> String {
        let Some(recipe) = self.recipe else {
            return String::new();
        };

        let mut lines = vec![
            format!("{} Details", recipe.name.to_uppercase()),
            format!("id: {}", recipe.id),
            format!("name: {}", recipe.name),
        ];
        if !recipe.ingredients.is_empty() {
            lines.push("ingredients:".to_string());
            lines.extend(recipe.ingredients.iter().map(|i| format!("  - {}", i)));
        }
        lines.join("\n")
    }
}
