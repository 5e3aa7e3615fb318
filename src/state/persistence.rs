use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Recipe;

/// Deduplicate by lowercase name: the last occurrence wins, in place, so
/// the original order is preserved.
fn dedup_by_name(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut deduped: Vec<Recipe> = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        match deduped.iter_mut().find(|r| r.key() == recipe.key()) {
            Some(existing) => *existing = recipe,
            None => deduped.push(recipe),
        }
    }

    deduped
}

/// Load recipes from a JSON file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(dedup_by_name(recipes))
}

/// Save recipes to a JSON file.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let deduped = dedup_by_name(recipes.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Classic Burger", "portions": 1, "targetFoodCostPct": 30,
             "ingredients": [
                {"name": "Onion", "purchasePrice": 10, "purchaseUnit": "kg",
                 "purchaseQty": 1, "recipeQty": 80, "recipeUnit": "g", "yieldPct": 85}
             ]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Classic Burger");
        assert_eq!(recipes[0].input.ingredients.len(), 1);

        // Save and reload
        let out_file = NamedTempFile::new().unwrap();
        save_recipes(out_file.path(), &recipes).unwrap();

        let reloaded = load_recipes(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].name, "Classic Burger");
        assert_eq!(reloaded[0].input.ingredients[0].yield_pct, 85.0);
    }

    #[test]
    fn test_deduplication_last_wins_in_place() {
        let json = r#"[
            {"name": "Soup", "portions": 2},
            {"name": "Salad", "portions": 1},
            {"name": "soup", "portions": 8}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 2);
        // Last occurrence wins, original slot keeps its position
        assert_eq!(recipes[0].name, "soup");
        assert_eq!(recipes[0].input.portions, 8);
        assert_eq!(recipes[1].name, "Salad");
    }
}
