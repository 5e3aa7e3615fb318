use std::collections::HashMap;
use std::sync::LazyLock;

/// Units the costing engine can convert between.
///
/// Only mass (kg/g) and volume (l/ml) are modeled. Every other token is
/// opaque: it never converts and is costed 1:1 against the purchase unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureUnit {
    Kilogram,
    Gram,
    Liter,
    Milliliter,
}

impl MeasureUnit {
    /// Parse a unit token (case-insensitive). Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "kg" => Some(Self::Kilogram),
            "g" => Some(Self::Gram),
            "l" => Some(Self::Liter),
            "ml" => Some(Self::Milliliter),
            _ => None,
        }
    }
}

/// Multipliers that express a recipe quantity in the purchase unit,
/// keyed by (purchase unit, recipe unit). Pairs not listed convert 1:1.
static CONVERSION_FACTORS: LazyLock<HashMap<(MeasureUnit, MeasureUnit), f64>> =
    LazyLock::new(|| {
        use MeasureUnit::*;

        let mut m = HashMap::new();
        m.insert((Kilogram, Gram), 1.0 / 1000.0);
        m.insert((Gram, Kilogram), 1000.0);
        m.insert((Liter, Milliliter), 1.0 / 1000.0);
        m.insert((Milliliter, Liter), 1000.0);
        m
    });

/// Factor that converts a recipe quantity into the purchase unit.
///
/// Unknown tokens, identical units, and mismatched families (mass vs
/// volume) all pass through at 1:1.
pub fn conversion_factor(purchase_unit: &str, recipe_unit: &str) -> f64 {
    match (MeasureUnit::parse(purchase_unit), MeasureUnit::parse(recipe_unit)) {
        (Some(p), Some(r)) => *CONVERSION_FACTORS.get(&(p, r)).unwrap_or(&1.0),
        _ => 1.0,
    }
}
