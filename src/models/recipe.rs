use serde::{Deserialize, Serialize};

use crate::pricing::constants::{
    DEFAULT_PORTIONS, DEFAULT_PURCHASE_QTY, DEFAULT_TARGET_FOOD_COST_PCT, DEFAULT_YIELD_PCT,
};

fn default_portions() -> u32 {
    DEFAULT_PORTIONS
}

fn default_purchase_qty() -> f64 {
    DEFAULT_PURCHASE_QTY
}

fn default_yield_pct() -> f64 {
    DEFAULT_YIELD_PCT
}

fn default_target_food_cost_pct() -> f64 {
    DEFAULT_TARGET_FOOD_COST_PCT
}

/// One recipe component with purchase and usage facts.
///
/// Units are free-form tokens; only kg/g and l/ml pairings are converted,
/// anything else is costed 1:1 against the purchase unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub name: Option<String>,

    /// Cost of `purchase_qty` units as bought.
    #[serde(default)]
    pub purchase_price: f64,

    #[serde(default)]
    pub purchase_unit: String,

    #[serde(default = "default_purchase_qty")]
    pub purchase_qty: f64,

    /// Quantity consumed by the recipe, in `recipe_unit`.
    #[serde(default)]
    pub recipe_qty: f64,

    #[serde(default)]
    pub recipe_unit: String,

    /// Usable-yield percentage after preparation loss (peeling, trimming).
    #[serde(default = "default_yield_pct")]
    pub yield_pct: f64,
}

impl Default for Ingredient {
    fn default() -> Self {
        Self {
            name: None,
            purchase_price: 0.0,
            purchase_unit: String::new(),
            purchase_qty: DEFAULT_PURCHASE_QTY,
            recipe_qty: 0.0,
            recipe_unit: String::new(),
            yield_pct: DEFAULT_YIELD_PCT,
        }
    }
}

/// Labor spent per portion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaborSpec {
    pub minutes_per_portion: f64,
    pub hourly_wage: f64,
}

/// Overhead as a percentage of the final sale price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverheadSpec {
    pub pct_of_sales: f64,
}

/// Taxes as a percentage of the final sale price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxesSpec {
    pub pct_of_sales: f64,
}

/// Everything the price calculator needs for one recipe.
///
/// Field names and nesting are the JSON contract with existing callers;
/// every field is optional with a documented default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    #[serde(default = "default_portions")]
    pub portions: u32,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub labor: LaborSpec,

    #[serde(default)]
    pub overhead: OverheadSpec,

    #[serde(default)]
    pub taxes: TaxesSpec,

    /// Target food cost as % of sale price. Values <= 0 fall back to 30%.
    #[serde(default = "default_target_food_cost_pct")]
    pub target_food_cost_pct: f64,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            portions: DEFAULT_PORTIONS,
            ingredients: Vec::new(),
            labor: LaborSpec::default(),
            overhead: OverheadSpec::default(),
            taxes: TaxesSpec::default(),
            target_food_cost_pct: DEFAULT_TARGET_FOOD_COST_PCT,
        }
    }
}

/// A named recipe as stored in the recipe book file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    #[serde(flatten)]
    pub input: PricingInput,
}

impl Recipe {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gets_defaults() {
        let input: PricingInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.portions, 1);
        assert!(input.ingredients.is_empty());
        assert_eq!(input.labor.minutes_per_portion, 0.0);
        assert_eq!(input.overhead.pct_of_sales, 0.0);
        assert_eq!(input.target_food_cost_pct, 30.0);
    }

    #[test]
    fn test_ingredient_defaults() {
        let ing: Ingredient = serde_json::from_str(r#"{"purchasePrice": 5}"#).unwrap();
        assert_eq!(ing.purchase_price, 5.0);
        assert_eq!(ing.purchase_qty, 1.0);
        assert_eq!(ing.yield_pct, 100.0);
        assert!(ing.name.is_none());
        assert!(ing.purchase_unit.is_empty());
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = r#"{
            "portions": 4,
            "ingredients": [
                {"name": "Rice", "purchasePrice": 8, "purchaseUnit": "kg",
                 "purchaseQty": 5, "recipeQty": 90, "recipeUnit": "g", "yieldPct": 100}
            ],
            "labor": {"minutesPerPortion": 3, "hourlyWage": 15},
            "overhead": {"pctOfSales": 10},
            "taxes": {"pctOfSales": 5},
            "targetFoodCostPct": 28
        }"#;

        let input: PricingInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.portions, 4);
        assert_eq!(input.ingredients.len(), 1);
        assert_eq!(input.ingredients[0].name.as_deref(), Some("Rice"));
        assert_eq!(input.ingredients[0].recipe_qty, 90.0);
        assert_eq!(input.labor.hourly_wage, 15.0);
        assert_eq!(input.taxes.pct_of_sales, 5.0);
        assert_eq!(input.target_food_cost_pct, 28.0);
    }

    #[test]
    fn test_recipe_flattens_input() {
        let json = r#"{"name": "Fried Rice", "portions": 2, "targetFoodCostPct": 25}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "Fried Rice");
        assert_eq!(recipe.key(), "fried rice");
        assert_eq!(recipe.input.portions, 2);
        assert_eq!(recipe.input.target_food_cost_pct, 25.0);
    }
}
