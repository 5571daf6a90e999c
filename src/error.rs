//! Error kinds surfaced by the tracing page. None of them are fatal: the
//! views catch each one and render a local fallback instead.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// Glyph has no asset entry, or the SVG fetch failed.
    #[error("SVG not found for '{glyph}'")]
    AssetNotFound { glyph: String },
    /// Glyph has no stroke-order instructions.
    #[error("stroke order data not available for '{glyph}'")]
    UnknownStrokeOrder { glyph: String },
    /// A browser API call failed or returned an unexpected type.
    #[error("dom: {0}")]
    Dom(String),
    /// Serializing the chart failed.
    #[error("encode: {0}")]
    Encode(String),
}

impl TraceError {
    pub fn asset_not_found(glyph: &str) -> Self {
        TraceError::AssetNotFound {
            glyph: glyph.to_string(),
        }
    }
}

impl From<JsValue> for TraceError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        TraceError::Dom(msg)
    }
}

impl From<TraceError> for JsValue {
    fn from(err: TraceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
