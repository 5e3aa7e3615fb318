use clap::Parser;
use std::path::Path;

use menu_pricer_rs::cli::{Cli, Command};
use menu_pricer_rs::error::{MenuError, Result};
use menu_pricer_rs::interface::{
    collect_recipe, display_quote, prompt_select_recipe, prompt_yes_no, resolve_recipe_name,
    write_breakdown_csv,
};
use menu_pricer_rs::models::{
    Ingredient, LaborSpec, OverheadSpec, PricingInput, Recipe, TaxesSpec,
};
use menu_pricer_rs::pricing::calculate_price;
use menu_pricer_rs::state::{RecipeBook, load_recipes, save_recipes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Quote { name, json, csv } => {
            cmd_quote(&cli.file, name.as_deref(), json, csv.as_deref())
        }
        Command::Build => cmd_build(&cli.file),
        Command::Example { json } => cmd_example(json),
    }
}

/// Price a recipe from the book.
fn cmd_quote(file_path: &str, name: Option<&str>, json: bool, csv: Option<&Path>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Recipe book not found: {}", file_path);
        eprintln!("Run 'build' to create one, or 'example' for a demo quote.");
        return Ok(());
    }

    let book = RecipeBook::new(load_recipes(path)?);

    if book.is_empty() {
        println!("Recipe book is empty. Run 'build' to add a recipe.");
        return Ok(());
    }

    let recipe_name = match name {
        Some(requested) => match resolve_recipe_name(&book.names(), requested)? {
            Some(n) => n,
            None => {
                println!("No recipe matching '{}'", requested);
                return Ok(());
            }
        },
        None => match book.single() {
            Some(r) => r.name.clone(),
            None => prompt_select_recipe(&book.names())?,
        },
    };

    let recipe = book
        .get(&recipe_name)
        .ok_or_else(|| MenuError::RecipeNotFound(recipe_name.clone()))?;

    let result = calculate_price(&recipe.input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_quote(&recipe.name, &result);
    }

    if let Some(csv_path) = csv {
        write_breakdown_csv(&result, csv_path)?;
        println!("Wrote breakdown to {:?}", csv_path);
    }

    Ok(())
}

/// Build a recipe interactively and price it.
fn cmd_build(file_path: &str) -> Result<()> {
    let recipe = collect_recipe()?;
    let result = calculate_price(&recipe.input);

    display_quote(&recipe.name, &result);

    let save = prompt_yes_no("Save recipe to the book?", true)?;
    if save {
        let path = Path::new(file_path);
        let mut book = if path.exists() {
            RecipeBook::new(load_recipes(path)?)
        } else {
            RecipeBook::new(Vec::new())
        };

        book.upsert(recipe);
        save_recipes(path, &book.to_recipes())?;
        println!("Recipe book saved to {}.", file_path);
    }

    Ok(())
}

/// Price the built-in example: one burger portion.
fn cmd_example(json: bool) -> Result<()> {
    let recipe = example_recipe();
    let result = calculate_price(&recipe.input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_quote(&recipe.name, &result);
    }

    Ok(())
}

fn example_recipe() -> Recipe {
    Recipe {
        name: "Classic Burger".to_string(),
        input: PricingInput {
            portions: 1,
            ingredients: vec![
                // Onion loses ~15% to peeling
                Ingredient {
                    name: Some("Onion".to_string()),
                    purchase_price: 10.0,
                    purchase_unit: "kg".to_string(),
                    purchase_qty: 1.0,
                    recipe_qty: 80.0,
                    recipe_unit: "g".to_string(),
                    yield_pct: 85.0,
                },
                Ingredient {
                    name: Some("Ground beef".to_string()),
                    purchase_price: 36.0,
                    purchase_unit: "kg".to_string(),
                    purchase_qty: 1.0,
                    recipe_qty: 160.0,
                    recipe_unit: "g".to_string(),
                    yield_pct: 100.0,
                },
                Ingredient {
                    name: Some("Bun".to_string()),
                    purchase_price: 1.2,
                    purchase_unit: "un".to_string(),
                    purchase_qty: 1.0,
                    recipe_qty: 1.0,
                    recipe_unit: "un".to_string(),
                    yield_pct: 100.0,
                },
            ],
            labor: LaborSpec {
                minutes_per_portion: 6.0,
                hourly_wage: 18.0,
            },
            overhead: OverheadSpec { pct_of_sales: 12.0 },
            taxes: TaxesSpec { pct_of_sales: 8.0 },
            target_food_cost_pct: 30.0,
        },
    }
}
