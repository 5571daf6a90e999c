use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::TraceError;

pub(crate) fn document() -> Result<Document, TraceError> {
    web_sys::window()
        .ok_or_else(|| TraceError::Dom("no window".into()))?
        .document()
        .ok_or_else(|| TraceError::Dom("no document".into()))
}

/// `<tag class="...">` with optional text content.
pub(crate) fn element(
    doc: &Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> Result<Element, TraceError> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

pub(crate) fn typed_element<T: JsCast>(doc: &Document, tag: &str, class: &str) -> Result<T, TraceError> {
    element(doc, tag, class, None)?
        .dyn_into::<T>()
        .map_err(|_| TraceError::Dom(format!("<{tag}> has unexpected type")))
}
