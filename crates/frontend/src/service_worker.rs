//! Background update worker registration

use crate::error::{FrontendError, Result};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ServiceWorker, ServiceWorkerContainer, ServiceWorkerRegistration, ServiceWorkerState};
use yew::Callback;

/// What a newly installed worker means for the running page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateEvent {
    /// A previous worker controls the page; a reload picks up the new build
    NeedRefresh,
    /// First install; assets are cached for offline use
    OfflineReady,
}

impl UpdateEvent {
    pub const fn for_installed_worker(page_has_controller: bool) -> Self {
        if page_has_controller {
            UpdateEvent::NeedRefresh
        } else {
            UpdateEvent::OfflineReady
        }
    }
}

/// Callbacks fired by the update worker. Both default to no-ops.
#[derive(Clone, PartialEq)]
pub struct UpdateHooks {
    pub on_need_refresh: Callback<()>,
    pub on_offline_ready: Callback<()>,
}

impl Default for UpdateHooks {
    fn default() -> Self {
        Self {
            on_need_refresh: Callback::noop(),
            on_offline_ready: Callback::noop(),
        }
    }
}

impl UpdateHooks {
    pub fn emit(&self, event: UpdateEvent) {
        tracing::info!(?event, "update worker installed");
        match event {
            UpdateEvent::NeedRefresh => self.on_need_refresh.emit(()),
            UpdateEvent::OfflineReady => self.on_offline_ready.emit(()),
        }
    }
}

fn service_worker_container() -> Result<Option<ServiceWorkerContainer>> {
    let window = web_sys::window().ok_or(FrontendError::NoWindow)?;
    let navigator = window.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        return Ok(None);
    }
    Ok(Some(navigator.service_worker()))
}

/// Register the worker and wire the update hooks. Browsers without
/// service worker support are skipped.
pub async fn register_service_worker(url: &str, hooks: UpdateHooks) -> Result<()> {
    let Some(container) = service_worker_container()? else {
        tracing::warn!("service workers unsupported, skipping registration");
        return Ok(());
    };

    let registration: ServiceWorkerRegistration = JsFuture::from(container.register(url))
        .await?
        .dyn_into()
        .map_err(FrontendError::from)?;
    tracing::info!(url, scope = %registration.scope(), "update worker registered");

    let watched = registration.clone();
    EventListener::new(&registration, "updatefound", move |_| {
        if let Some(worker) = watched.installing() {
            watch_installing_worker(worker, container.clone(), hooks.clone());
        }
    })
    .forget();

    Ok(())
}

fn watch_installing_worker(worker: ServiceWorker, container: ServiceWorkerContainer, hooks: UpdateHooks) {
    let target = worker.clone();
    EventListener::new(&worker, "statechange", move |_| {
        if target.state() == ServiceWorkerState::Installed {
            let event = UpdateEvent::for_installed_worker(container.controller().is_some());
            hooks.emit(event);
        }
    })
    .forget();
}

/// Fire-and-forget registration used by bootstrap
pub fn spawn_registration(url: &'static str, hooks: UpdateHooks) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = register_service_worker(url, hooks).await {
            tracing::warn!(error = %e, "update worker registration failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn first_install_is_offline_ready() {
        assert_eq!(
            UpdateEvent::for_installed_worker(false),
            UpdateEvent::OfflineReady
        );
    }

    #[test]
    fn install_under_existing_controller_needs_refresh() {
        assert_eq!(
            UpdateEvent::for_installed_worker(true),
            UpdateEvent::NeedRefresh
        );
    }

    #[test]
    fn hooks_route_events_to_matching_callback() {
        let refreshes = Rc::new(Cell::new(0));
        let ready = Rc::new(Cell::new(0));
        let hooks = UpdateHooks {
            on_need_refresh: {
                let refreshes = refreshes.clone();
                Callback::from(move |()| refreshes.set(refreshes.get() + 1))
            },
            on_offline_ready: {
                let ready = ready.clone();
                Callback::from(move |()| ready.set(ready.get() + 1))
            },
        };

        hooks.emit(UpdateEvent::NeedRefresh);
        hooks.emit(UpdateEvent::OfflineReady);
        hooks.emit(UpdateEvent::OfflineReady);

        assert_eq!(refreshes.get(), 1);
        assert_eq!(ready.get(), 2);
    }

    #[test]
    fn default_hooks_do_nothing() {
        let hooks = UpdateHooks::default();
        hooks.emit(UpdateEvent::NeedRefresh);
        hooks.emit(UpdateEvent::OfflineReady);
    }
}
