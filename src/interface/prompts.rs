use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::{Ingredient, LaborSpec, OverheadSpec, PricingInput, Recipe, TaxesSpec};

const UNIT_CHOICES: [&str; 5] = ["kg", "g", "l", "ml", "other"];

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for a unit token: one of the convertible units, or a free-form
/// token (un, dz, pack) that will be costed 1:1.
fn prompt_unit(prompt: &str) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&UNIT_CHOICES)
        .default(0)
        .interact()?;

    if UNIT_CHOICES[selection] == "other" {
        let input: String = Input::new()
            .with_prompt("Unit token (e.g. un, dz, pack)")
            .interact_text()?;
        Ok(input.trim().to_lowercase())
    } else {
        Ok(UNIT_CHOICES[selection].to_string())
    }
}

/// Prompt for the ingredient list. An empty name finishes the loop.
pub fn prompt_ingredients() -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::new();

    loop {
        let name: String = Input::new()
            .with_prompt("Ingredient name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let name = name.trim().to_string();
        if name.is_empty() {
            break;
        }

        let purchase_price = prompt_number("Purchase price", "0")?;
        let purchase_qty = prompt_number("Purchase quantity", "1")?;
        let purchase_unit = prompt_unit("Purchase unit")?;
        let recipe_qty = prompt_number("Quantity used by the recipe", "0")?;
        let recipe_unit = prompt_unit("Recipe unit")?;
        let yield_pct = prompt_number("Usable yield % after prep loss", "100")?;

        ingredients.push(Ingredient {
            name: Some(name),
            purchase_price,
            purchase_unit,
            purchase_qty,
            recipe_qty,
            recipe_unit,
            yield_pct,
        });

        println!("Added ingredient #{}", ingredients.len());
    }

    Ok(ingredients)
}

/// Collect a full recipe interactively.
pub fn collect_recipe() -> Result<Recipe> {
    let name: String = Input::new().with_prompt("Recipe name").interact_text()?;

    let portions = prompt_number("Portions per batch", "1")?;
    if portions < 1.0 {
        return Err(MenuError::InvalidInput(
            "Portions must be at least 1".to_string(),
        ));
    }

    let ingredients = prompt_ingredients()?;

    let minutes_per_portion = prompt_number("Prep minutes per portion", "0")?;
    let hourly_wage = prompt_number("Hourly wage", "0")?;
    let overhead_pct = prompt_number("Overhead as % of sale price", "0")?;
    let taxes_pct = prompt_number("Taxes as % of sale price", "0")?;
    let target_food_cost_pct = prompt_number("Target food cost %", "30")?;

    Ok(Recipe {
        name,
        input: PricingInput {
            portions: portions as u32,
            ingredients,
            labor: LaborSpec {
                minutes_per_portion,
                hourly_wage,
            },
            overhead: OverheadSpec {
                pct_of_sales: overhead_pct,
            },
            taxes: TaxesSpec {
                pct_of_sales: taxes_pct,
            },
            target_food_cost_pct,
        },
    })
}

/// Resolve a requested recipe name against the book with fuzzy matching.
///
/// Exact (case-insensitive) match wins; otherwise jaro-winkler candidates
/// above 0.7 are confirmed or offered as a selection. `None` means nothing
/// matched or the user declined every candidate.
pub fn resolve_recipe_name(names: &[String], requested: &str) -> Result<Option<String>> {
    let exact = names
        .iter()
        .find(|n| n.to_lowercase() == requested.to_lowercase());

    if let Some(name) = exact {
        return Ok(Some(name.clone()));
    }

    let mut candidates: Vec<(&String, f64)> = names
        .iter()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &requested.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(Some(name.clone()));
        }
        return Ok(None);
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(n, _)| (*n).clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Prompt for a recipe when none was named on the command line.
pub fn prompt_select_recipe(names: &[String]) -> Result<String> {
    let selection = Select::new()
        .with_prompt("Which recipe?")
        .items(names)
        .default(0)
        .interact()?;

    Ok(names[selection].clone())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
