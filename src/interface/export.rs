use std::path::Path;

use crate::error::Result;
use crate::models::quote::PricingResult;

/// Write the ingredient breakdown to a CSV file.
pub fn write_breakdown_csv(result: &PricingResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "ingredient",
        "cost",
        "purchase_price",
        "purchase_qty",
        "purchase_unit",
        "recipe_qty",
        "recipe_unit",
        "yield_pct",
        "adjusted_qty",
    ])?;

    for item in &result.breakdown.ingredients {
        let d = &item.details;
        wtr.write_record([
            item.name.clone(),
            format!("{:.2}", item.cost),
            format!("{:.2}", d.purchase_price),
            format!("{:.3}", d.purchase_qty),
            d.purchase_unit.clone(),
            format!("{:.3}", d.recipe_qty),
            d.recipe_unit.clone(),
            format!("{:.1}", d.yield_pct),
            format!("{:.3}", d.adjusted_qty),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
