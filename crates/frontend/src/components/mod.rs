//! Reusable UI components

pub mod ingredient_table;
pub mod nav_bar;
pub mod user_profile;

pub use ingredient_table::IngredientTable;
pub use nav_bar::NavBar;
pub use user_profile::UserProfile;
