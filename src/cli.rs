use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MenuPricer — price menu items from ingredient, labor, and overhead costs.
#[derive(Parser, Debug)]
#[command(name = "menu_pricer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe book JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price a recipe from the recipe book.
    Quote {
        /// Recipe name (fuzzy-matched); prompts if omitted and several exist.
        name: Option<String>,

        /// Print the raw result as JSON instead of the report.
        #[arg(long)]
        json: bool,

        /// Also write the ingredient breakdown to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Build a recipe interactively, price it, and optionally save it.
    Build,

    /// Price the built-in example recipe.
    Example {
        /// Print the raw result as JSON instead of the report.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Quote {
            name: None,
            json: false,
            csv: None,
        }
    }
}
