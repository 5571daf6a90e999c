use crate::dom;
use crate::error::TraceError;

const STYLE_ID: &str = "kt-styles";

pub const APP_CSS: &str = r#"
.kt-chart { font-family: sans-serif; text-align: center; padding: 2rem; }
.kt-grid {
  display: grid; grid-template-columns: repeat(5, 1fr); gap: 20px;
  width: min(900px, 90vw); margin: 0 auto; justify-content: center;
}
.kt-card {
  background: #f9f9f9; border: 2px solid #ccc; border-radius: 12px; cursor: pointer;
  display: flex; flex-direction: column; justify-content: center; align-items: center;
  height: 140px; width: 100%; box-sizing: border-box; padding: 15px;
  text-align: center; user-select: none; transition: transform 0.2s;
}
.kt-card:hover { transform: scale(1.05); }
.kt-card:active { transform: scale(0.95); }
.kt-card-glyph {
  font-size: 56px; font-weight: 900; line-height: 1; margin-bottom: 8px; color: #222;
  font-family: 'Noto Sans JP', 'Arial Unicode MS', sans-serif;
  text-shadow: 1px 1px 2px rgba(0,0,0,0.1);
}
.kt-card-row {
  display: flex; justify-content: space-around; gap: 10px; width: 100%;
  font-size: 14px; color: #444;
}
.kt-romaji { font-style: italic; color: #666; }
.kt-hiragana { font-weight: 500; }
.kt-meaning { font-weight: 700; }
.kt-trace { display: flex; flex-wrap: wrap; padding: 2rem; gap: 2rem; justify-content: center; }
.kt-trace-info { flex: 1 1 300px; max-width: 400px; }
.kt-back { text-decoration: underline; color: blue; }
.kt-trace-practice { flex: 1 1 320px; text-align: center; }
.kt-stack { position: relative; margin: auto; background: #fffef2; border-radius: 12px; }
.kt-guide { position: absolute; width: 100%; height: 100%; opacity: 0.5; z-index: 1; }
.kt-guide svg { width: 100%; height: 100%; }
.kt-guide-error { color: red; }
.kt-canvas {
  border: 2px solid #d81b60; border-radius: 12px; background: transparent;
  position: absolute; top: 0; left: 0; z-index: 2; touch-action: none;
}
.kt-controls { margin-top: 1rem; }
.kt-clear { cursor: pointer; }
@keyframes draw { to { stroke-dashoffset: 0; } }
.draw-path { animation: draw 0.8s ease forwards; }
"#;

/// Installs the app stylesheet once; later calls are no-ops.
pub fn install() -> Result<(), TraceError> {
    let doc = dom::document()?;
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = dom::element(&doc, "style", "", Some(APP_CSS))?;
    style.set_id(STYLE_ID);
    let head = doc
        .head()
        .ok_or_else(|| TraceError::Dom("no <head>".into()))?;
    head.append_child(&style)?;
    Ok(())
}
