//! Build profiles
//!
//! `Dist` is the standalone build: hashed file names into `dist/`, served
//! from `/`. `BackendStatic` builds straight into the backend's static
//! folder with stable file names and ships the PWA assets.

use crate::config::{BundleSettings, PwaSettings};
use crate::error::BundleError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BuildProfile {
    Dist,
    #[default]
    BackendStatic,
}

impl BuildProfile {
    pub const fn as_str(self) -> &'static str {
        match self {
            BuildProfile::Dist => "dist",
            BuildProfile::BackendStatic => "backend-static",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dev-server rule forwarding a path prefix to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyRule {
    pub path: String,
    pub target: String,
}

impl ProxyRule {
    /// Backend URL including the forwarded prefix, as the dev server expects it
    pub fn backend(&self) -> String {
        format!("{}{}", self.target.trim_end_matches('/'), self.path)
    }
}

/// Everything a profile resolves to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPlan {
    pub profile: BuildProfile,
    pub dist: PathBuf,
    pub public_url: String,
    pub filehash: bool,
    pub serve_port: u16,
    pub proxies: Vec<ProxyRule>,
    pub pwa: Option<PwaSettings>,
}

impl BuildPlan {
    pub fn resolve(profile: BuildProfile, settings: &BundleSettings) -> Self {
        let proxies = settings
            .proxy_paths
            .iter()
            .map(|path| ProxyRule {
                path: path.clone(),
                target: settings.backend_url.clone(),
            })
            .collect();

        match profile {
            BuildProfile::Dist => Self {
                profile,
                dist: settings.dist_dir.clone(),
                public_url: "/".to_string(),
                filehash: true,
                serve_port: settings.serve_port,
                proxies,
                pwa: None,
            },
            BuildProfile::BackendStatic => Self {
                profile,
                dist: settings.static_dir.clone(),
                public_url: settings.static_url.clone(),
                filehash: false,
                serve_port: settings.serve_port,
                proxies,
                pwa: Some(settings.pwa.clone()),
            },
        }
    }

    /// PWA settings, or an error for profiles that ship none
    pub fn require_pwa(&self) -> Result<&PwaSettings, BundleError> {
        self.pwa
            .as_ref()
            .ok_or_else(|| BundleError::PwaDisabled(self.profile.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_profile_hashes_into_dist() {
        let plan = BuildPlan::resolve(BuildProfile::Dist, &BundleSettings::default());

        assert_eq!(plan.dist, PathBuf::from("dist"));
        assert_eq!(plan.public_url, "/");
        assert!(plan.filehash);
        assert!(plan.pwa.is_none());
    }

    #[test]
    fn backend_static_profile_uses_fixed_names_and_pwa() {
        let plan = BuildPlan::resolve(BuildProfile::BackendStatic, &BundleSettings::default());

        assert_eq!(plan.dist, PathBuf::from("../static/vue"));
        assert_eq!(plan.public_url, "/static/vue/");
        assert!(!plan.filehash);
        assert!(plan.pwa.is_some());
    }

    #[test]
    fn both_profiles_share_proxy_rules_in_order() {
        let settings = BundleSettings::default();
        for profile in [BuildProfile::Dist, BuildProfile::BackendStatic] {
            let plan = BuildPlan::resolve(profile, &settings);
            let backends: Vec<_> = plan.proxies.iter().map(ProxyRule::backend).collect();
            assert_eq!(
                backends,
                vec![
                    "http://127.0.0.1:8000/exercise/api",
                    "http://127.0.0.1:8000/api"
                ]
            );
        }
    }

    #[test]
    fn overridden_backend_flows_into_proxies() {
        let settings = BundleSettings {
            backend_url: "http://backend:8080/".to_string(),
            ..BundleSettings::default()
        };

        let plan = BuildPlan::resolve(BuildProfile::Dist, &settings);

        assert_eq!(plan.proxies[1].backend(), "http://backend:8080/api");
    }

    #[test]
    fn require_pwa_rejects_dist_profile() {
        let plan = BuildPlan::resolve(BuildProfile::Dist, &BundleSettings::default());
        assert!(matches!(plan.require_pwa(), Err(BundleError::PwaDisabled(_))));
    }

    #[test]
    fn profile_names_parse() {
        for profile in [BuildProfile::Dist, BuildProfile::BackendStatic] {
            assert_eq!(BuildProfile::from_str(profile.as_str(), false), Ok(profile));
        }
        assert!(BuildProfile::from_str("legacy", false).is_err());
    }

    #[test]
    fn later_generation_is_the_default() {
        assert_eq!(BuildProfile::default(), BuildProfile::BackendStatic);
    }
}
