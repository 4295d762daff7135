use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Mount point #{0} not found in document")]
    MountPointMissing(String),

    #[error("No browser window available")]
    NoWindow,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| "unknown".to_string());
        FrontendError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, FrontendError>;
