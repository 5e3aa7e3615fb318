pub mod calculations;
pub mod constants;
pub mod units;

pub use calculations::{calculate_price, round2};
pub use constants::*;
pub use units::{MeasureUnit, conversion_factor};
