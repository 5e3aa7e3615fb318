use crate::models::quote::{
    Breakdown, CostSummary, IngredientQuote, PriceSummary, PricingResult, QuoteDetails,
    RatioSummary,
};
use crate::models::{Ingredient, PricingInput};
use crate::pricing::constants::*;
use crate::pricing::units::conversion_factor;

/// Replace non-finite values with a fallback.
///
/// Every raw numeric field passes through here exactly once, during
/// normalization; past that point the math can assume finite inputs.
#[inline]
fn coerce(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Round to 2 decimals, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An ingredient after coercion: finite numbers, lowercased unit tokens,
/// placeholder name applied.
#[derive(Debug, Clone)]
struct NormalizedIngredient {
    name: String,
    purchase_price: f64,
    purchase_qty: f64,
    purchase_unit: String,
    recipe_qty: f64,
    recipe_unit: String,
    yield_pct: f64,
}

fn normalize(ing: &Ingredient) -> NormalizedIngredient {
    let name = match ing.name.as_deref() {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => INGREDIENT_PLACEHOLDER.to_string(),
    };

    NormalizedIngredient {
        name,
        purchase_price: coerce(ing.purchase_price, 0.0),
        purchase_qty: coerce(ing.purchase_qty, DEFAULT_PURCHASE_QTY),
        purchase_unit: ing.purchase_unit.to_lowercase(),
        recipe_qty: coerce(ing.recipe_qty, 0.0),
        recipe_unit: ing.recipe_unit.to_lowercase(),
        yield_pct: coerce(ing.yield_pct, DEFAULT_YIELD_PCT),
    }
}

/// Cost of one normalized ingredient, plus the purchase-unit quantity it
/// consumes after conversion and yield adjustment.
fn cost_ingredient(ing: &NormalizedIngredient) -> (f64, f64) {
    let unit_cost = if ing.purchase_qty > 0.0 {
        ing.purchase_price / ing.purchase_qty
    } else {
        0.0
    };

    let in_purchase_unit =
        ing.recipe_qty * conversion_factor(&ing.purchase_unit, &ing.recipe_unit);

    // yield 85% means buying more raw input than the recipe consumes
    let yield_factor = if ing.yield_pct > 0.0 {
        100.0 / ing.yield_pct
    } else {
        1.0
    };
    let adjusted_qty = in_purchase_unit * yield_factor;

    (unit_cost * adjusted_qty, adjusted_qty)
}

/// Compute a recommended sale price for one recipe.
///
/// Pure and deterministic. Malformed field values degrade to documented
/// defaults instead of failing, and the output never contains NaN or
/// infinities. Monetary and percentage figures are rounded to 2 decimals
/// independently at assembly; only the two estimated percentages are
/// derived from the already-rounded recommended price, so the reported
/// metrics agree with the price that actually lands on the menu.
pub fn calculate_price(input: &PricingInput) -> PricingResult {
    let portions = input.portions.max(DEFAULT_PORTIONS);
    let target_food_cost_pct = coerce(input.target_food_cost_pct, DEFAULT_TARGET_FOOD_COST_PCT);

    let mut ingredients_cost_total = 0.0;
    let mut ingredient_quotes = Vec::with_capacity(input.ingredients.len());

    for ing in &input.ingredients {
        let norm = normalize(ing);
        let (cost, adjusted_qty) = cost_ingredient(&norm);
        ingredients_cost_total += cost;

        ingredient_quotes.push(IngredientQuote {
            name: norm.name,
            cost: round2(cost),
            details: QuoteDetails {
                purchase_price: norm.purchase_price,
                purchase_qty: norm.purchase_qty,
                purchase_unit: norm.purchase_unit,
                recipe_qty: norm.recipe_qty,
                recipe_unit: norm.recipe_unit,
                yield_pct: norm.yield_pct,
                adjusted_qty: round2(adjusted_qty),
            },
        });
    }

    let food_cost_per_portion = ingredients_cost_total / portions as f64;

    let labor_minutes = coerce(input.labor.minutes_per_portion, 0.0);
    let hourly_wage = coerce(input.labor.hourly_wage, 0.0);
    let labor_cost_per_portion = labor_minutes / MINUTES_PER_HOUR * hourly_wage;

    let direct_cost_per_portion = food_cost_per_portion + labor_cost_per_portion;

    let target_rate = if target_food_cost_pct > 0.0 {
        target_food_cost_pct / 100.0
    } else {
        FALLBACK_TARGET_RATE
    };
    let base_price_by_food_cost = food_cost_per_portion / target_rate;

    let overhead_rate = coerce(input.overhead.pct_of_sales, 0.0) / 100.0;
    let tax_rate = coerce(input.taxes.pct_of_sales, 0.0) / 100.0;

    // Gross up so that overhead and taxes, both percentages of the final
    // price, still leave the base target intact. A combined share >= 100%
    // cannot be grossed up; the base price is returned unchanged.
    let denom = 1.0 - overhead_rate - tax_rate;
    let recommended = if denom > 0.0 {
        base_price_by_food_cost / denom
    } else {
        base_price_by_food_cost
    };

    let final_price = round2(recommended);

    let estimated_food_cost_pct = if final_price > 0.0 {
        food_cost_per_portion / final_price * 100.0
    } else {
        0.0
    };
    let estimated_gross_margin_pct = if final_price > 0.0 {
        (final_price - direct_cost_per_portion) / final_price * 100.0
    } else {
        0.0
    };

    PricingResult {
        portions,
        costs: CostSummary {
            food_cost_per_portion: round2(food_cost_per_portion),
            labor_cost_per_portion: round2(labor_cost_per_portion),
            direct_cost_per_portion: round2(direct_cost_per_portion),
        },
        price: PriceSummary {
            recommended: final_price,
            base_by_food_cost: round2(base_price_by_food_cost),
        },
        pct: RatioSummary {
            target_food_cost_pct: round2(target_food_cost_pct),
            estimated_food_cost_pct: round2(estimated_food_cost_pct),
            overhead_pct: round2(overhead_rate * 100.0),
            taxes_pct: round2(tax_rate * 100.0),
            estimated_gross_margin_pct: round2(estimated_gross_margin_pct),
        },
        breakdown: Breakdown {
            ingredients: ingredient_quotes,
        },
    }
}
