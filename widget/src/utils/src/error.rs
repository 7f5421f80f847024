use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no element matches `{0}`")]
    MissingElement(&'static str),
    #[error("no element with id `{0}` to mount into")]
    MissingMountTarget(String),
    #[error("player element has no playback api attached")]
    MissingPlayerApi,
    #[error("js error: {0}")]
    Js(String),
    #[error("invalid widget config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse widget config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Js(format!("{value:?}"))
    }
}

impl From<WidgetError> for JsValue {
    fn from(value: WidgetError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}
