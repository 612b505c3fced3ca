use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid page content: {0}")]
    Content(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_keep_the_parser_message() {
        let err: UiError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid page content:"));
    }

    #[test]
    fn missing_browser_objects_have_readable_messages() {
        assert_eq!(UiError::NoWindow.to_string(), "browser window is not available");
        assert_eq!(UiError::NoBody.to_string(), "document has no body");
    }
}
