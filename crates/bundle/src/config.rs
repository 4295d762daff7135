//! Bundle settings
//!
//! Built from compiled-in defaults, then an optional TOML file, then
//! `PORTION_BUNDLE_*` environment variables (`__` separates nested keys,
//! e.g. `PORTION_BUNDLE_PWA__THEME_COLOR`).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Address of the backend the dev server forwards API calls to
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSettings {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IconSettings {
    fn png(src: &str, sizes: &str, purpose: Option<&str>) -> Self {
        Self {
            src: src.to_string(),
            sizes: sizes.to_string(),
            mime_type: "image/png".to_string(),
            purpose: purpose.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PwaSettings {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<IconSettings>,
    /// Files under the output directory the worker precaches
    pub precache_glob: String,
    /// Worker script file name, written at the output root
    pub service_worker: String,
}

impl Default for PwaSettings {
    fn default() -> Self {
        Self {
            name: "Portion Customizer".to_string(),
            short_name: "Portion".to_string(),
            description: "Convert and customize recipe quantities".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            theme_color: "#ff7f50".to_string(),
            background_color: "#ffffff".to_string(),
            icons: vec![
                IconSettings::png("pwa-192x192.png", "192x192", None),
                IconSettings::png("pwa-512x512.png", "512x512", None),
                IconSettings::png("pwa-512x512.png", "512x512", Some("any maskable")),
            ],
            precache_glob: "**/*.{js,css,html,ico,png,svg,wasm}".to_string(),
            service_worker: "sw.js".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSettings {
    /// Backend the dev proxy forwards to
    pub backend_url: String,
    /// Path prefixes forwarded to the backend, in match order
    pub proxy_paths: Vec<String>,
    /// Dev server listen port
    pub serve_port: u16,
    /// Output of the standalone profile
    pub dist_dir: PathBuf,
    /// Backend static folder the PWA profile builds into
    pub static_dir: PathBuf,
    /// URL the backend serves `static_dir` under
    pub static_url: String,
    pub pwa: PwaSettings,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            proxy_paths: vec!["/exercise/api".to_string(), "/api".to_string()],
            serve_port: 5173,
            dist_dir: PathBuf::from("dist"),
            static_dir: PathBuf::from("../static/vue"),
            static_url: "/static/vue/".to_string(),
            pwa: PwaSettings::default(),
        }
    }
}

impl BundleSettings {
    /// Load settings, layering an optional file and the environment over
    /// the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value has the wrong type
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading bundle settings file");
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("PORTION_BUNDLE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_forward_both_api_prefixes_to_local_backend() {
        let settings = BundleSettings::default();
        assert_eq!(settings.backend_url, "http://127.0.0.1:8000");
        assert_eq!(settings.proxy_paths, vec!["/exercise/api", "/api"]);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let settings = BundleSettings::load(None).unwrap();
        assert_eq!(settings, BundleSettings::default());
    }

    #[test]
    fn file_overrides_backend_and_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "backend_url = \"http://10.0.0.5:9000\"").unwrap();
        writeln!(file, "[pwa]").unwrap();
        writeln!(file, "theme_color = \"#000000\"").unwrap();

        let settings = BundleSettings::load(Some(file.path())).unwrap();

        assert_eq!(settings.backend_url, "http://10.0.0.5:9000");
        assert_eq!(settings.pwa.theme_color, "#000000");
        assert_eq!(settings.pwa.name, "Portion Customizer");
        assert_eq!(settings.proxy_paths, BundleSettings::default().proxy_paths);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = BundleSettings::load(Some(Path::new("/nonexistent/bundle.toml")));
        assert!(result.is_err());
    }
}
