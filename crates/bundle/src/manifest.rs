//! PWA web app manifest

use crate::config::{IconSettings, PwaSettings};
use crate::error::Result;
use serde::Serialize;

pub const MANIFEST_FILE_NAME: &str = "manifest.webmanifest";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub scope: String,
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<IconSettings>,
}

/// URL of a file at the output root when the output is served under `public_url`
pub fn public_path(public_url: &str, file: &str) -> String {
    format!(
        "{}/{}",
        public_url.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

impl WebManifest {
    /// Icons resolve relative to `public_url`, where the build output is served
    pub fn new(pwa: &PwaSettings, public_url: &str) -> Self {
        Self {
            name: pwa.name.clone(),
            short_name: pwa.short_name.clone(),
            description: pwa.description.clone(),
            start_url: pwa.start_url.clone(),
            scope: "/".to_string(),
            display: pwa.display.clone(),
            theme_color: pwa.theme_color.clone(),
            background_color: pwa.background_color.clone(),
            icons: pwa
                .icons
                .iter()
                .map(|icon| IconSettings {
                    src: public_path(public_url, &icon.src),
                    ..icon.clone()
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn manifest_json() -> Value {
        let manifest = WebManifest::new(&PwaSettings::default(), "/static/vue/");
        serde_json::from_str(&manifest.to_json().unwrap()).unwrap()
    }

    #[test]
    fn carries_names_and_colours() {
        let json = manifest_json();

        assert_eq!(json["name"], "Portion Customizer");
        assert_eq!(json["short_name"], "Portion");
        assert_eq!(json["theme_color"], "#ff7f50");
        assert_eq!(json["background_color"], "#ffffff");
        assert_eq!(json["display"], "standalone");
    }

    #[test]
    fn icons_are_served_from_public_url() {
        let json = manifest_json();
        let icons = json["icons"].as_array().unwrap();

        assert_eq!(icons.len(), 3);
        assert_eq!(icons[0]["src"], "/static/vue/pwa-192x192.png");
        assert_eq!(icons[0]["sizes"], "192x192");
        assert_eq!(icons[0]["type"], "image/png");
        assert!(icons[0].get("purpose").is_none());
        assert_eq!(icons[2]["purpose"], "any maskable");
    }

    #[test]
    fn public_url_without_trailing_slash_is_joined() {
        let manifest = WebManifest::new(&PwaSettings::default(), "/app");
        assert_eq!(manifest.icons[1].src, "/app/pwa-512x512.png");
    }
}
