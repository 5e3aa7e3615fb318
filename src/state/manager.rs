use crate::models::Recipe;

/// In-memory collection of named recipes, looked up case-insensitively.
///
/// Backed by a Vec so the book keeps its file order in selection prompts.
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Get a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        let key = name.to_lowercase();
        self.recipes.iter().find(|r| r.key() == key)
    }

    /// Insert a recipe, replacing any existing one with the same name.
    pub fn upsert(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.key() == recipe.key()) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
    }

    /// Recipe names in book order.
    pub fn names(&self) -> Vec<String> {
        self.recipes.iter().map(|r| r.name.clone()).collect()
    }

    /// The only recipe in the book, if there is exactly one.
    pub fn single(&self) -> Option<&Recipe> {
        if self.recipes.len() == 1 {
            self.recipes.first()
        } else {
            None
        }
    }

    /// Recipes for serialization.
    pub fn to_recipes(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricingInput;

    fn recipe(name: &str, portions: u32) -> Recipe {
        Recipe {
            name: name.to_string(),
            input: PricingInput {
                portions,
                ..PricingInput::default()
            },
        }
    }

    #[test]
    fn test_get_case_insensitive() {
        let book = RecipeBook::new(vec![recipe("Classic Burger", 1)]);
        assert!(book.get("classic burger").is_some());
        assert!(book.get("CLASSIC BURGER").is_some());
        assert!(book.get("pizza").is_none());
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let mut book = RecipeBook::new(vec![recipe("Soup", 2)]);
        book.upsert(recipe("SOUP", 6));

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("soup").unwrap().input.portions, 6);
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut book = RecipeBook::new(vec![recipe("Soup", 2)]);
        book.upsert(recipe("Salad", 1));

        assert_eq!(book.len(), 2);
        assert_eq!(book.names(), vec!["Soup", "Salad"]);
    }

    #[test]
    fn test_single() {
        let one = RecipeBook::new(vec![recipe("Soup", 2)]);
        assert_eq!(one.single().unwrap().name, "Soup");

        let two = RecipeBook::new(vec![recipe("Soup", 2), recipe("Salad", 1)]);
        assert!(two.single().is_none());

        let empty = RecipeBook::new(Vec::new());
        assert!(empty.single().is_none());
        assert!(empty.is_empty());
    }
}
