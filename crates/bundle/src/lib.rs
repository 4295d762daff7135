//! Build configuration for the Portion frontend
//!
//! Resolves the two build profiles, renders `Trunk.toml` and produces the
//! PWA assets (web manifest, precache list, update worker).

pub mod config;
pub mod error;
pub mod manifest;
pub mod precache;
pub mod profile;
pub mod pwa;
pub mod trunk;

pub use config::BundleSettings;
pub use error::{BundleError, Result};
pub use profile::{BuildPlan, BuildProfile};
