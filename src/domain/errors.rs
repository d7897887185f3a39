/// Simplified error system - the viewport math itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ValidationError(String),
    BrowserApiError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::BrowserApiError(msg) => write!(f, "Browser API Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

// Convenience alias
pub type ConfigResult<T> = Result<T, AppError>;
