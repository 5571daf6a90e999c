//! Build-time tunables for the tracing page.
//!
//! Everything here is a compile-time default. The SVG asset base can be
//! overridden when building with `KANJI_TRACE_ASSET_BASE=/static/kanji`.

/// Default location of the stroke SVGs.
pub const DEFAULT_ASSET_BASE: &str = "/kanji";

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f64,
    pub line_cap: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TraceConfig {
    pub asset_base: String,
    /// Seconds between the start of consecutive stroke reveals.
    pub reveal_stagger_s: f64,
    /// Seconds each stroke reveal lasts.
    pub reveal_duration_s: f64,
    pub guide_color: &'static str,
    pub guide_width: &'static str,
    /// Canvas and overlay edge length in CSS pixels.
    pub surface_size: u32,
    pub pen: StrokeStyle,
    /// Evaluator sample must exceed this to count as a pass.
    pub pass_threshold: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            asset_base: asset_base_from_env(option_env!("KANJI_TRACE_ASSET_BASE")),
            reveal_stagger_s: 0.3,
            reveal_duration_s: 0.8,
            guide_color: "#d81b60",
            guide_width: "3px",
            surface_size: 320,
            pen: StrokeStyle {
                color: "rgba(0,0,0,0.7)",
                width: 4.0,
                line_cap: "round",
            },
            pass_threshold: 0.3,
        }
    }
}

fn asset_base_from_env(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() => {
            let base = base.trim_end_matches('/');
            if base.is_empty() {
                String::new()
            } else {
                base.to_string()
            }
        }
        _ => DEFAULT_ASSET_BASE.to_string(),
    }
}
