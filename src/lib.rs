pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{PricingInput, PricingResult, Recipe};
pub use pricing::calculate_price;
