use serde::{Deserialize, Serialize};

/// Pricing quote for one recipe.
///
/// All monetary and percentage figures are rounded to 2 decimals when the
/// quote is assembled. Field names and nesting are the JSON contract with
/// existing callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub portions: u32,
    pub costs: CostSummary,
    pub price: PriceSummary,
    pub pct: RatioSummary,
    pub breakdown: Breakdown,
}

/// Per-portion costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub food_cost_per_portion: f64,
    pub labor_cost_per_portion: f64,
    pub direct_cost_per_portion: f64,
}

/// Recommended sale price and the food-cost-target base it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub recommended: f64,
    pub base_by_food_cost: f64,
}

/// What the recommended price actually achieves, in percentages of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSummary {
    pub target_food_cost_pct: f64,
    pub estimated_food_cost_pct: f64,
    pub overhead_pct: f64,
    pub taxes_pct: f64,
    pub estimated_gross_margin_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub ingredients: Vec<IngredientQuote>,
}

/// One input ingredient mirrored back with its computed cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientQuote {
    pub name: String,
    pub cost: f64,
    pub details: QuoteDetails,
}

/// Coerced inputs and conversion outcome behind an ingredient's cost.
///
/// Unit tokens are echoed lowercased; `adjusted_qty` is the purchase-unit
/// quantity after conversion and yield adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDetails {
    pub purchase_price: f64,
    pub purchase_qty: f64,
    pub purchase_unit: String,
    pub recipe_qty: f64,
    pub recipe_unit: String,
    pub yield_pct: f64,
    pub adjusted_qty: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> PricingResult {
        PricingResult {
            portions: 1,
            costs: CostSummary {
                food_cost_per_portion: 7.9,
                labor_cost_per_portion: 1.8,
                direct_cost_per_portion: 9.7,
            },
            price: PriceSummary {
                recommended: 32.92,
                base_by_food_cost: 26.34,
            },
            pct: RatioSummary {
                target_food_cost_pct: 30.0,
                estimated_food_cost_pct: 24.0,
                overhead_pct: 12.0,
                taxes_pct: 8.0,
                estimated_gross_margin_pct: 70.53,
            },
            breakdown: Breakdown {
                ingredients: vec![IngredientQuote {
                    name: "Onion".to_string(),
                    cost: 0.94,
                    details: QuoteDetails {
                        purchase_price: 10.0,
                        purchase_qty: 1.0,
                        purchase_unit: "kg".to_string(),
                        recipe_qty: 80.0,
                        recipe_unit: "g".to_string(),
                        yield_pct: 85.0,
                        adjusted_qty: 0.09,
                    },
                }],
            },
        }
    }

    #[test]
    fn test_json_contract_key_names() {
        let json = serde_json::to_string(&sample_result()).unwrap();

        for key in [
            "\"portions\"",
            "\"foodCostPerPortion\"",
            "\"laborCostPerPortion\"",
            "\"directCostPerPortion\"",
            "\"recommended\"",
            "\"baseByFoodCost\"",
            "\"targetFoodCostPct\"",
            "\"estimatedFoodCostPct\"",
            "\"overheadPct\"",
            "\"taxesPct\"",
            "\"estimatedGrossMarginPct\"",
            "\"breakdown\"",
            "\"ingredients\"",
            "\"details\"",
            "\"adjustedQty\"",
        ] {
            assert!(json.contains(key), "missing key {} in {}", key, json);
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: PricingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
