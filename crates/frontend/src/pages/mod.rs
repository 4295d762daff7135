//! Pages resolved by the route table

pub mod bookmark_list;
pub mod recipe_detail;
pub mod recipe_form;
pub mod recipe_input;
pub mod timeline;
pub mod user_album;

pub use bookmark_list::BookmarkList;
pub use recipe_detail::RecipeDetail;
pub use recipe_form::RecipeForm;
pub use recipe_input::RecipeInput;
pub use timeline::Timeline;
pub use user_album::UserAlbum;
