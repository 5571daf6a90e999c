//! Tracing page: info panel on the left, guide overlay plus drawing canvas on
//! the right.
//!
//! Mounting resolves the glyph, builds the DOM, starts the guide fetch and
//! attaches the surface. Every listener is owned by [`TracingView`]; dropping
//! it (on navigation) releases them and marks any in-flight fetch stale.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, HtmlAnchorElement, HtmlButtonElement, HtmlCanvasElement};

use crate::app;
use crate::config::TraceConfig;
use crate::dom;
use crate::error::TraceError;
use crate::feedback::RandomEvaluator;
use crate::kanji;
use crate::route::Route;
use crate::session::TracingSession;
use crate::stroke_guide;
use crate::surface::{self, DrawingSurface};

pub const TRACE_TIP: &str = "Start strokes from top to bottom, left to right.";

/// Everything the page shows for a glyph, resolved from the static tables.
#[derive(Clone, Debug, PartialEq)]
pub struct TracePage {
    pub glyph: String,
    pub meaning: String,
    pub instructions: Vec<&'static str>,
    pub asset_url: Result<String, TraceError>,
}

impl TracePage {
    pub fn resolve(glyph: &str, cfg: &TraceConfig) -> Self {
        Self {
            glyph: glyph.to_string(),
            meaning: kanji::meaning_for(glyph),
            instructions: kanji::stroke_order_or_fallback(glyph),
            asset_url: stroke_guide::resolve_asset_url(glyph, cfg),
        }
    }

    pub fn title(&self) -> String {
        format!("Trace Kanji: {}", self.glyph)
    }
}

pub struct TracingView {
    session: Rc<RefCell<TracingSession>>,
    _surface: Rc<DrawingSurface>,
    _listeners: Vec<EventListener>,
}

impl TracingView {
    pub fn mount(root: &Element, glyph: &str, cfg: Rc<TraceConfig>) -> Result<Self, TraceError> {
        let page = TracePage::resolve(glyph, &cfg);
        let doc = dom::document()?;
        let layout = dom::element(&doc, "div", "kt-trace", None)?;

        // Info panel
        let info = dom::element(&doc, "div", "kt-trace-info", None)?;
        info.append_child(&*dom::element(&doc, "h2", "", Some(&page.title()))?)?;
        let meaning = dom::element(&doc, "p", "", None)?;
        meaning.append_child(&*dom::element(&doc, "strong", "", Some("Meaning:"))?)?;
        meaning.append_child(&doc.create_text_node(&format!(" {}", page.meaning)))?;
        info.append_child(&meaning)?;
        let order_label = dom::element(&doc, "p", "", None)?;
        order_label.append_child(&*dom::element(&doc, "strong", "", Some("Stroke Order:"))?)?;
        info.append_child(&order_label)?;
        let list = dom::element(&doc, "ol", "kt-stroke-order", None)?;
        for step in &page.instructions {
            list.append_child(&*dom::element(&doc, "li", "", Some(step))?)?;
        }
        info.append_child(&list)?;
        let tip = dom::element(&doc, "p", "", None)?;
        tip.append_child(&*dom::element(&doc, "strong", "", Some("Tips:"))?)?;
        tip.append_child(&doc.create_text_node(&format!(" {TRACE_TIP}")))?;
        info.append_child(&tip)?;
        let back: HtmlAnchorElement = dom::typed_element(&doc, "a", "kt-back")?;
        back.set_href(&Route::Chart.to_path());
        back.set_text_content(Some("← Back to Chart"));
        info.append_child(&back)?;
        layout.append_child(&info)?;

        // Guide overlay + canvas
        let practice = dom::element(&doc, "div", "kt-trace-practice", None)?;
        let stack = dom::element(&doc, "div", "kt-stack", None)?;
        let size = cfg.surface_size;
        stack.set_attribute("style", &format!("width:{size}px; height:{size}px;"))?;
        let guide = dom::element(&doc, "div", "kt-guide", None)?;
        stack.append_child(&guide)?;
        let canvas: HtmlCanvasElement = dom::typed_element(&doc, "canvas", "kt-canvas")?;
        canvas.set_width(size);
        canvas.set_height(size);
        stack.append_child(&canvas)?;
        practice.append_child(&stack)?;
        let controls = dom::element(&doc, "div", "kt-controls", None)?;
        let clear_btn: HtmlButtonElement = dom::typed_element(&doc, "button", "kt-clear")?;
        clear_btn.set_text_content(Some("🧽 Clear"));
        controls.append_child(&clear_btn)?;
        let feedback_el = dom::element(&doc, "div", "kt-feedback", None)?;
        surface::render_feedback(&feedback_el, None);
        controls.append_child(&feedback_el)?;
        practice.append_child(&controls)?;
        layout.append_child(&practice)?;

        root.append_child(&layout)?;

        let session = Rc::new(RefCell::new(TracingSession::new(
            glyph,
            Box::new(RandomEvaluator::browser(cfg.pass_threshold)),
        )));
        stroke_guide::spawn_guide_load(
            guide,
            page.glyph.clone(),
            page.asset_url.clone(),
            Rc::downgrade(&session),
            cfg.clone(),
        );
        let surface = Rc::new(DrawingSurface::attach(
            canvas,
            feedback_el,
            session.clone(),
            cfg.pen.clone(),
        )?);

        let clear_surface = surface.clone();
        let clear_listener = EventListener::new(&clear_btn, "click", move |_| {
            clear_surface.clear();
        });
        let back_listener = EventListener::new_with_options(
            &back,
            "click",
            EventListenerOptions::enable_prevent_default(),
            |event| {
                event.prevent_default();
                app::navigate(Route::Chart);
            },
        );

        gloo::console::log!(format!("trace view: mounted '{}'", page.glyph));
        Ok(Self {
            session,
            _surface: surface,
            _listeners: vec![clear_listener, back_listener],
        })
    }

    pub fn glyph(&self) -> String {
        self.session.borrow().glyph().to_string()
    }

    pub fn session(&self) -> Rc<RefCell<TracingSession>> {
        self.session.clone()
    }
}

impl Drop for TracingView {
    fn drop(&mut self) {
        stroke_guide::invalidate_pending_loads();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> TraceConfig {
        TraceConfig {
            asset_base: "/kanji".to_string(),
            ..TraceConfig::default()
        }
    }

    #[test]
    fn test_resolve_known_glyph() {
        let page = TracePage::resolve("人", &cfg());
        assert_eq!(page.title(), "Trace Kanji: 人");
        assert_eq!(page.meaning, "Person");
        assert_eq!(page.asset_url.as_deref(), Ok("/kanji/person.svg"));
        assert_eq!(page.instructions.len(), 2);
        assert_eq!(
            page.instructions[0],
            "Draw the left diagonal stroke from top to bottom."
        );
    }

    #[test]
    fn test_resolve_unknown_glyph_falls_back() {
        let page = TracePage::resolve("犬", &cfg());
        assert_eq!(page.meaning, "Unknown");
        assert_eq!(page.instructions, vec![kanji::STROKE_ORDER_FALLBACK]);
        let err = page.asset_url.unwrap_err();
        assert_eq!(err.to_string(), "SVG not found for '犬'");
    }
}
