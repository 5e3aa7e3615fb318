pub mod quote;
pub mod recipe;

pub use quote::{
    Breakdown, CostSummary, IngredientQuote, PriceSummary, PricingResult, QuoteDetails,
    RatioSummary,
};
pub use recipe::{Ingredient, LaborSpec, OverheadSpec, PricingInput, Recipe, TaxesSpec};
