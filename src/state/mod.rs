mod manager;
mod persistence;

pub use manager::RecipeBook;
pub use persistence::{load_recipes, save_recipes};
