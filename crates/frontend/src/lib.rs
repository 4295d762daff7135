pub mod app;
pub mod avatar;
pub mod bootstrap;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod service_worker;
pub mod services;
pub mod store;

pub use app::App;
pub use avatar::AvatarUrl;
pub use config::AppConfig;
pub use error::FrontendError;
pub use routes::Route;
pub use store::{ConvertedIngredient, QuantifyStore, use_quantify};
