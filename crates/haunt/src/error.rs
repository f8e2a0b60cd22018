//! Error type shared by configuration and the page driver.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HauntError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("no global `window` available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl HauntError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfig { field, reason }
    }
}

impl From<HauntError> for wasm_bindgen::JsValue {
    fn from(err: HauntError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
