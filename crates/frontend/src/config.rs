//! Frontend configuration

/// Application-wide constants shared by bootstrap and the HTTP client
pub struct AppConfig;

impl AppConfig {
    /// Element the application is mounted into
    pub const MOUNT_ID: &'static str = "app";

    /// Element rendered by the backend template that carries the avatar URL
    pub const AVATAR_ELEMENT_ID: &'static str = "avatar-url";

    /// Background update worker script, served from the site root
    pub const SERVICE_WORKER_URL: &'static str = "/sw.js";

    /// Cookie the backend stores its CSRF token in
    pub const XSRF_COOKIE_NAME: &'static str = "csrftoken";

    /// Header the backend expects the CSRF token echoed in
    pub const XSRF_HEADER_NAME: &'static str = "X-CSRFToken";
}
