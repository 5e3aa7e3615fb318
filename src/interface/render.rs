use crate::models::quote::PricingResult;

/// Print a pricing quote as a formatted report.
pub fn display_quote(title: &str, result: &PricingResult) {
    println!();
    println!("=== {} ===", title);
    println!();

    if result.breakdown.ingredients.is_empty() {
        println!("(no ingredients)");
    } else {
        let max_name_len = result
            .breakdown
            .ingredients
            .iter()
            .map(|i| i.name.len())
            .max()
            .unwrap_or(10);

        for (i, item) in result.breakdown.ingredients.iter().enumerate() {
            let d = &item.details;

            let mut usage = format!("{:.2} {}", d.recipe_qty, d.recipe_unit);
            if d.recipe_unit != d.purchase_unit || d.yield_pct != 100.0 {
                usage.push_str(&format!(
                    " -> buys {:.3} {}",
                    d.adjusted_qty, d.purchase_unit
                ));
            }
            if d.yield_pct != 100.0 {
                usage.push_str(&format!(" (yield {:.0}%)", d.yield_pct));
            }

            println!(
                "{:>3}. {:<width$} - {:>8.2} | {}",
                i + 1,
                item.name,
                item.cost,
                usage,
                width = max_name_len
            );
        }
    }

    println!();
    println!("--- Costs per portion ({} portions) ---", result.portions);
    println!("Food cost:   {:>8.2}", result.costs.food_cost_per_portion);
    println!("Labor:       {:>8.2}", result.costs.labor_cost_per_portion);
    println!("Direct cost: {:>8.2}", result.costs.direct_cost_per_portion);

    println!();
    println!("--- Pricing ---");
    println!(
        "Base price ({}% food cost target): {:.2}",
        result.pct.target_food_cost_pct, result.price.base_by_food_cost
    );
    println!("Recommended price: {:.2}", result.price.recommended);

    println!();
    println!("--- At the recommended price ---");
    println!(
        "Estimated food cost: {:.2}% (target {:.2}%)",
        result.pct.estimated_food_cost_pct, result.pct.target_food_cost_pct
    );
    println!(
        "Overhead: {:.2}%  Taxes: {:.2}%",
        result.pct.overhead_pct, result.pct.taxes_pct
    );
    println!(
        "Estimated gross margin: {:.2}%",
        result.pct.estimated_gross_margin_pct
    );
    println!();
}
