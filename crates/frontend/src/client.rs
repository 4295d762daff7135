//! Global HTTP client defaults
//!
//! Every request carries credentials and echoes the backend's CSRF cookie
//! in the CSRF header.

use crate::config::AppConfig;
use gloo_net::http::RequestBuilder;
use once_cell::sync::Lazy;
use std::sync::RwLock;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, RequestCredentials};

/// Credential and CSRF settings applied to outgoing requests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientDefaults {
    pub with_credentials: bool,
    pub xsrf_cookie_name: String,
    pub xsrf_header_name: String,
}

impl Default for ClientDefaults {
    fn default() -> Self {
        Self {
            with_credentials: true,
            xsrf_cookie_name: AppConfig::XSRF_COOKIE_NAME.to_string(),
            xsrf_header_name: AppConfig::XSRF_HEADER_NAME.to_string(),
        }
    }
}

impl ClientDefaults {
    /// Header to attach given the current `document.cookie` string
    pub fn xsrf_header(&self, cookie_header: &str) -> Option<(String, String)> {
        read_cookie(cookie_header, &self.xsrf_cookie_name)
            .map(|token| (self.xsrf_header_name.clone(), token))
    }
}

static CLIENT_DEFAULTS: Lazy<RwLock<ClientDefaults>> =
    Lazy::new(|| RwLock::new(ClientDefaults::default()));

/// Replace the global client defaults
pub fn install(defaults: ClientDefaults) {
    tracing::debug!(
        with_credentials = defaults.with_credentials,
        cookie = %defaults.xsrf_cookie_name,
        header = %defaults.xsrf_header_name,
        "installing HTTP client defaults"
    );
    match CLIENT_DEFAULTS.write() {
        Ok(mut guard) => *guard = defaults,
        Err(poisoned) => *poisoned.into_inner() = defaults,
    }
}

/// Current global client defaults
pub fn defaults() -> ClientDefaults {
    match CLIENT_DEFAULTS.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Look up a cookie value in a `name=value; name2=value2` string
pub fn read_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

fn document_cookies() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default()
}

/// Build a request with the global defaults applied
pub fn request(method: gloo_net::http::Method, url: &str) -> RequestBuilder {
    let defaults = defaults();

    let mut builder = RequestBuilder::new(url).method(method);
    if defaults.with_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    if let Some((header, token)) = defaults.xsrf_header(&document_cookies()) {
        builder = builder.header(&header, &token);
    }
    builder
}
