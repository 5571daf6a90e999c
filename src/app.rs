//! Application shell: owns the mount point and the single active view, and
//! re-renders on navigation and history changes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::chart_view::ChartView;
use crate::config::TraceConfig;
use crate::dom;
use crate::error::TraceError;
use crate::kanji;
use crate::route::Route;
use crate::styles;
use crate::tracing_view::TracingView;

const ROOT_ID: &str = "kt-root";

enum ActiveView {
    // Held only for its card listeners.
    Chart(#[allow(dead_code)] ChartView),
    Trace(TracingView),
}

struct AppShell {
    root: Element,
    config: Rc<TraceConfig>,
    view: Option<ActiveView>,
    _popstate: EventListener,
}

impl AppShell {
    fn show(&mut self, route: Route) -> Result<(), TraceError> {
        // Drop the old view first so its listeners are gone before new ones attach.
        if let Some(ActiveView::Trace(old)) = &self.view {
            gloo::console::log!(format!("trace view: leaving '{}'", old.glyph()));
        }
        self.view = None;
        self.root.set_inner_html("");
        let view = match route {
            Route::Chart => ActiveView::Chart(ChartView::mount(&self.root, kanji::character_records())?),
            Route::Trace(glyph) => {
                ActiveView::Trace(TracingView::mount(&self.root, &glyph, self.config.clone())?)
            }
        };
        self.view = Some(view);
        Ok(())
    }
}

thread_local! {
    static APP: RefCell<Option<AppShell>> = const { RefCell::new(None) };
}

pub(crate) fn start() -> Result<(), TraceError> {
    styles::install()?;
    let window = web_sys::window().ok_or_else(|| TraceError::Dom("no window".into()))?;
    let doc = dom::document()?;
    let root = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => el,
        None => {
            let el = dom::element(&doc, "div", "", None)?;
            el.set_id(ROOT_ID);
            doc.body()
                .ok_or_else(|| TraceError::Dom("no <body>".into()))?
                .append_child(&el)?;
            el
        }
    };
    let popstate = EventListener::new(&window, "popstate", |_| schedule_render());
    APP.with(|app| {
        *app.borrow_mut() = Some(AppShell {
            root,
            config: Rc::new(TraceConfig::default()),
            view: None,
            _popstate: popstate,
        });
    });
    render_current()
}

/// Push `route` onto history and render it on the next tick.
pub(crate) fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = route.to_path();
    match window.history() {
        Ok(history) => {
            if history
                .push_state_with_url(&JsValue::NULL, "", Some(&path))
                .is_err()
            {
                gloo::console::warn!(format!("router: pushState failed for {path}"));
            }
        }
        Err(_) => {
            let _ = window.location().set_pathname(&path);
            return;
        }
    }
    schedule_render();
}

// Deferred so a view is never dropped from inside one of its own listeners.
fn schedule_render() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = render_current() {
            gloo::console::warn!(format!("router: render failed: {err}"));
        }
    });
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Chart)
}

fn render_current() -> Result<(), TraceError> {
    let route = current_route();
    gloo::console::log!(format!("router: {}", route.to_path()));
    APP.with(|app| match app.borrow_mut().as_mut() {
        Some(shell) => shell.show(route),
        None => Ok(()),
    })
}
