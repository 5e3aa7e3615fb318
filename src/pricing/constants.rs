/// Portions assumed when none are given; smaller values clamp up to this.
pub const DEFAULT_PORTIONS: u32 = 1;

/// Purchase quantity assumed when none is given.
pub const DEFAULT_PURCHASE_QTY: f64 = 1.0;

/// Usable-yield percentage assumed when none is given (no prep loss).
pub const DEFAULT_YIELD_PCT: f64 = 100.0;

/// Food-cost target (% of sale price) assumed when none is given.
pub const DEFAULT_TARGET_FOOD_COST_PCT: f64 = 30.0;

/// Rate substituted when the configured food-cost target is not positive.
pub const FALLBACK_TARGET_RATE: f64 = 0.30;

/// Name used for unnamed ingredients in the breakdown.
pub const INGREDIENT_PLACEHOLDER: &str = "Ingredient";

pub const MINUTES_PER_HOUR: f64 = 60.0;
