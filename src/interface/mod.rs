pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_breakdown_csv;
pub use prompts::{
    collect_recipe, prompt_ingredients, prompt_select_recipe, prompt_yes_no, resolve_recipe_name,
};
pub use render::display_quote;
