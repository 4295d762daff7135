//! Application bootstrap
//!
//! Reads the avatar URL the backend template rendered, installs the HTTP
//! client defaults, mounts the app and registers the update worker.

use crate::app::{App, AppProps};
use crate::avatar::{AvatarUrl, read_avatar_url};
use crate::client::{self, ClientDefaults};
use crate::config::AppConfig;
use crate::error::{FrontendError, Result};
use crate::service_worker::{self, UpdateHooks};

/// Everything needed to start the app
#[derive(Clone, PartialEq)]
pub struct BootstrapOptions {
    pub mount_id: &'static str,
    pub client: ClientDefaults,
    /// `None` skips update worker registration
    pub service_worker: Option<(&'static str, UpdateHooks)>,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            mount_id: AppConfig::MOUNT_ID,
            client: ClientDefaults::default(),
            service_worker: Some((AppConfig::SERVICE_WORKER_URL, UpdateHooks::default())),
        }
    }
}

/// Start the application in the current document
pub fn start(options: BootstrapOptions) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(FrontendError::NoWindow)?;

    let avatar_url = read_avatar_url(&document);
    tracing::info!(avatar_url = ?avatar_url, "avatar URL provided to app");

    client::install(options.client);

    let root = document
        .get_element_by_id(options.mount_id)
        .ok_or_else(|| FrontendError::MountPointMissing(options.mount_id.to_string()))?;

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            avatar_url: AvatarUrl(avatar_url),
        },
    )
    .render();
    tracing::debug!(mount_id = options.mount_id, "app mounted");

    if let Some((url, hooks)) = options.service_worker {
        service_worker::spawn_registration(url, hooks);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_mount_into_app_and_register_worker() {
        let options = BootstrapOptions::default();

        assert_eq!(options.mount_id, "app");
        assert_eq!(options.client, ClientDefaults::default());
        let (url, _) = options.service_worker.expect("worker registration enabled");
        assert_eq!(url, "/sw.js");
    }
}
