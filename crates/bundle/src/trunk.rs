//! `Trunk.toml` rendering

use crate::error::Result;
use crate::profile::BuildPlan;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TrunkConfig {
    pub build: TrunkBuild,
    pub serve: TrunkServe,
    #[serde(rename = "proxy", skip_serializing_if = "Vec::is_empty")]
    pub proxies: Vec<TrunkProxy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<TrunkHook>,
}

#[derive(Debug, Serialize)]
pub struct TrunkBuild {
    pub target: String,
    pub dist: String,
    pub public_url: String,
    pub filehash: bool,
}

#[derive(Debug, Serialize)]
pub struct TrunkServe {
    pub addresses: Vec<String>,
    pub port: u16,
}

#[derive(Debug, Serialize)]
pub struct TrunkProxy {
    pub backend: String,
}

#[derive(Debug, Serialize)]
pub struct TrunkHook {
    pub stage: String,
    pub command: String,
    pub command_arguments: Vec<String>,
}

impl TrunkConfig {
    pub fn from_plan(plan: &BuildPlan) -> Self {
        let hooks = if plan.pwa.is_some() {
            // Trunk exports TRUNK_STAGING_DIR to hooks; `pwa` reads it as its default output
            vec![TrunkHook {
                stage: "post_build".to_string(),
                command: "cargo".to_string(),
                command_arguments: [
                    "run",
                    "--quiet",
                    "-p",
                    "portion-bundle",
                    "--",
                    "pwa",
                    "--profile",
                    plan.profile.as_str(),
                ]
                .into_iter()
                .map(str::to_string)
                .collect(),
            }]
        } else {
            Vec::new()
        };

        Self {
            build: TrunkBuild {
                target: "index.html".to_string(),
                dist: plan.dist.to_string_lossy().into_owned(),
                public_url: plan.public_url.clone(),
                filehash: plan.filehash,
            },
            serve: TrunkServe {
                addresses: vec!["127.0.0.1".to_string()],
                port: plan.serve_port,
            },
            proxies: plan
                .proxies
                .iter()
                .map(|rule| TrunkProxy {
                    backend: rule.backend(),
                })
                .collect(),
            hooks,
        }
    }

    pub fn render(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BundleSettings;
    use crate::profile::BuildProfile;

    fn rendered(profile: BuildProfile) -> toml::Table {
        let plan = BuildPlan::resolve(profile, &BundleSettings::default());
        let text = TrunkConfig::from_plan(&plan).render().unwrap();
        toml::from_str(&text).unwrap()
    }

    #[test]
    fn dist_profile_renders_hashed_build() {
        let value = rendered(BuildProfile::Dist);

        assert_eq!(value["build"]["dist"].as_str(), Some("dist"));
        assert_eq!(value["build"]["filehash"].as_bool(), Some(true));
        assert_eq!(value["build"]["public_url"].as_str(), Some("/"));
        assert!(value.get("hooks").is_none());
    }

    #[test]
    fn backend_static_profile_renders_fixed_names_and_hook() {
        let value = rendered(BuildProfile::BackendStatic);

        assert_eq!(value["build"]["dist"].as_str(), Some("../static/vue"));
        assert_eq!(value["build"]["filehash"].as_bool(), Some(false));

        let hooks = value["hooks"].as_array().unwrap();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0]["stage"].as_str(), Some("post_build"));
        let args: Vec<_> = hooks[0]["command_arguments"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(toml::Value::as_str)
            .collect();
        assert!(args.ends_with(&["pwa", "--profile", "backend-static"]));
    }

    #[test]
    fn proxies_render_in_declared_order() {
        for profile in [BuildProfile::Dist, BuildProfile::BackendStatic] {
            let value = rendered(profile);
            let backends: Vec<_> = value["proxy"]
                .as_array()
                .unwrap()
                .iter()
                .filter_map(|p| p["backend"].as_str())
                .collect();
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
    fn dev_server_listens_on_configured_port() {
        let value = rendered(BuildProfile::Dist);
        assert_eq!(value["serve"]["port"].as_integer(), Some(5173));
    }
}
