/// Rejected class name in a [`NavToggleConfig`](crate::config::NavToggleConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The named field was set to an empty string.
    #[error("empty class name for {0}")]
    EmptyClass(&'static str),
    /// The value cannot be used as a single CSS class token.
    #[error("invalid class name for {field}: {value:?}")]
    InvalidClass {
        field: &'static str,
        value: String,
    },
    /// Trigger and active marker share the same class.
    #[error("trigger and active class are both {0:?}")]
    SameClass(String),
}

/// Failure while attaching activation listeners to rendered markup.
#[cfg(feature = "dom")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// A DOM call threw; the inner string is the rendered JS error.
    #[error("dom call failed: {0}")]
    Js(String),
}

#[cfg(feature = "dom")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
