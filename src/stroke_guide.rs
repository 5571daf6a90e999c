//! Stroke-order guide layer: fetches a kanji SVG and reveals its paths one by
//! one with the dash-offset technique.
//!
//! Each `<path>` gets `stroke-dasharray` and `stroke-dashoffset` set to its
//! total length, then the `draw-path` keyframes animate the offset to zero.
//! Path `i` starts `i * stagger` seconds after the markup lands, so strokes
//! appear strictly in document order.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response, SvgGeometryElement};

use crate::config::TraceConfig;
use crate::error::TraceError;
use crate::kanji;
use crate::session::TracingSession;

pub const DRAW_PATH_CLASS: &str = "draw-path";

/// Timing of one path's reveal, in seconds from load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeReveal {
    pub delay_s: f64,
    pub duration_s: f64,
}

/// A path that was found in the loaded SVG and scheduled for reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePath {
    pub index: usize,
    pub length: f64,
    pub reveal: StrokeReveal,
}

pub fn asset_url(asset_base: &str, asset_id: &str) -> String {
    format!("{}/{}.svg", asset_base.trim_end_matches('/'), asset_id)
}

/// Glyph -> fetchable URL, or `AssetNotFound` when the glyph has no asset.
pub fn resolve_asset_url(glyph: &str, cfg: &TraceConfig) -> Result<String, TraceError> {
    kanji::resolve_asset(glyph)
        .map(|asset| asset_url(&cfg.asset_base, asset))
        .ok_or_else(|| TraceError::asset_not_found(glyph))
}

pub fn reveal_schedule(path_count: usize, stagger_s: f64, duration_s: f64) -> Vec<StrokeReveal> {
    (0..path_count)
        .map(|i| StrokeReveal {
            delay_s: i as f64 * stagger_s,
            duration_s,
        })
        .collect()
}

/// Identity of one fetch. Only the most recent ticket may touch the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub glyph: String,
}

/// Monotonic load counter. Starting a load or leaving the page bumps it, so
/// responses for a previous visit are recognised as stale.
#[derive(Debug, Default)]
pub struct LoadGuard {
    current: Cell<u64>,
}

impl LoadGuard {
    pub fn begin(&self, glyph: &str) -> LoadTicket {
        let generation = self.current.get().wrapping_add(1);
        self.current.set(generation);
        LoadTicket {
            generation,
            glyph: glyph.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.current.get() == ticket.generation
    }

    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }
}

thread_local! {
    static LOADS: LoadGuard = LoadGuard::default();
}

pub(crate) fn invalidate_pending_loads() {
    LOADS.with(|guard| guard.invalidate());
}

/// Fire-and-forget load of the guide for `glyph` into `container`.
/// Failures are rendered inline; nothing is returned to the caller.
pub(crate) fn spawn_guide_load(
    container: Element,
    glyph: String,
    asset_url: Result<String, TraceError>,
    session: Weak<RefCell<TracingSession>>,
    cfg: Rc<TraceConfig>,
) {
    let ticket = LOADS.with(|guard| guard.begin(&glyph));
    let url = match asset_url {
        Ok(url) => url,
        Err(err) => {
            gloo::console::warn!(format!("stroke guide: {err}"));
            show_inline_error(&container, &err);
            return;
        }
    };
    gloo::console::log!(format!("stroke guide: fetching {url}"));
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_svg_text(&url, &ticket.glyph).await;
        if !LOADS.with(|guard| guard.is_current(&ticket)) {
            gloo::console::log!(format!(
                "stroke guide: discarding stale response for '{}'",
                ticket.glyph
            ));
            return;
        }
        let outcome = result.and_then(|svg| {
            container.set_inner_html(&svg);
            animate_paths(&container, &cfg)
        });
        match outcome {
            Ok(paths) => {
                if let Some(session) = session.upgrade() {
                    let mut session = session.borrow_mut();
                    session.set_loaded_paths(paths);
                    gloo::console::log!(format!(
                        "stroke guide: revealing {} strokes for '{}'",
                        session.loaded_paths().len(),
                        session.glyph()
                    ));
                }
            }
            Err(err) => {
                gloo::console::warn!(format!("stroke guide: {err}"));
                show_inline_error(&container, &TraceError::asset_not_found(&ticket.glyph));
            }
        }
    });
}

async fn fetch_svg_text(url: &str, glyph: &str) -> Result<String, TraceError> {
    let window = web_sys::window().ok_or_else(|| TraceError::Dom("no window".into()))?;
    let not_found = || TraceError::asset_not_found(glyph);
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| not_found())?;
    let resp: Response = resp_value.dyn_into().map_err(|_| not_found())?;
    if !resp.ok() {
        return Err(not_found());
    }
    let text_promise = resp.text().map_err(|_| not_found())?;
    let text = JsFuture::from(text_promise).await.map_err(|_| not_found())?;
    text.as_string().ok_or_else(not_found)
}

/// Styles every `<path>` under `container` and schedules its reveal.
fn animate_paths(container: &Element, cfg: &TraceConfig) -> Result<Vec<StrokePath>, TraceError> {
    let nodes = container.query_selector_all("path")?;
    let schedule = reveal_schedule(
        nodes.length() as usize,
        cfg.reveal_stagger_s,
        cfg.reveal_duration_s,
    );
    let mut paths = Vec::with_capacity(schedule.len());
    for (index, reveal) in schedule.into_iter().enumerate() {
        let Some(node) = nodes.item(index as u32) else {
            continue;
        };
        let Ok(path) = node.dyn_into::<SvgGeometryElement>() else {
            continue;
        };
        let length = path.get_total_length() as f64;
        let dash = format!("{length}");
        let style = path.style();
        style.set_property("stroke", cfg.guide_color)?;
        style.set_property("stroke-width", cfg.guide_width)?;
        style.set_property("fill", "none")?;
        style.set_property("stroke-dasharray", &dash)?;
        style.set_property("stroke-dashoffset", &dash)?;
        style.set_property("animation-duration", &format!("{:.3}s", reveal.duration_s))?;
        style.set_property("animation-delay", &format!("{:.3}s", reveal.delay_s))?;
        path.class_list().add_1(DRAW_PATH_CLASS)?;
        paths.push(StrokePath {
            index,
            length,
            reveal,
        });
    }
    Ok(paths)
}

fn show_inline_error(container: &Element, err: &TraceError) {
    container.set_inner_html("");
    let Some(doc) = container.owner_document() else {
        return;
    };
    if let Ok(p) = doc.create_element("p") {
        let _ = p.set_attribute("class", "kt-guide-error");
        p.set_text_content(Some(&err.to_string()));
        let _ = container.append_child(&p);
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
    fn test_asset_url() {
        assert_eq!(asset_url("/kanji", "person"), "/kanji/person.svg");
        assert_eq!(asset_url("/kanji/", "tree"), "/kanji/tree.svg");
        assert_eq!(asset_url("", "eye"), "/eye.svg");
    }

    #[test]
    fn test_resolve_asset_url() {
        assert_eq!(resolve_asset_url("人", &cfg()).unwrap(), "/kanji/person.svg");
        assert_eq!(
            resolve_asset_url("犬", &cfg()),
            Err(TraceError::asset_not_found("犬"))
        );
    }

    #[test]
    fn test_reveal_schedule_starts_at_zero_and_increases() {
        let schedule = reveal_schedule(6, 0.3, 0.8);
        assert_eq!(schedule.len(), 6);
        assert_eq!(schedule[0].delay_s, 0.0);
        for pair in schedule.windows(2) {
            assert!(pair[1].delay_s > pair[0].delay_s);
        }
        assert!((schedule[5].delay_s - 1.5).abs() < 1e-9);
        assert!(schedule.iter().all(|r| r.duration_s == 0.8));
    }

    #[test]
    fn test_reveal_schedule_empty() {
        assert!(reveal_schedule(0, 0.3, 0.8).is_empty());
    }

    #[test]
    fn test_load_guard_discards_older_tickets() {
        let guard = LoadGuard::default();
        let first = guard.begin("人");
        assert!(guard.is_current(&first));
        let second = guard.begin("女");
        assert!(!guard.is_current(&first));
        assert!(guard.is_current(&second));
        guard.invalidate();
        assert!(!guard.is_current(&second));
    }
}
