// Integration tests (native) for the `kanji-trace` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use kanji_trace::config::TraceConfig;
use kanji_trace::feedback::{Feedback, RandomEvaluator};
use kanji_trace::route::Route;
use kanji_trace::session::TracingSession;
use kanji_trace::stroke_guide::reveal_schedule;
use kanji_trace::surface::{InkSurface, PenInput, Point, Segment};
use kanji_trace::tracing_view::TracePage;

#[derive(Default)]
struct CountingInk {
    live_segments: usize,
}

impl InkSurface for CountingInk {
    fn draw_segment(&mut self, _segment: &Segment) {
        self.live_segments += 1;
    }
    fn clear(&mut self) {
        self.live_segments = 0;
    }
}

fn cfg() -> TraceConfig {
    TraceConfig {
        asset_base: "/kanji".to_string(),
        ..TraceConfig::default()
    }
}

fn counting_session(calls: std::rc::Rc<std::cell::Cell<usize>>) -> TracingSession {
    let evaluator = RandomEvaluator::with_sampler(0.3, move || {
        calls.set(calls.get() + 1);
        0.0
    });
    TracingSession::new("人", Box::new(evaluator))
}

#[test]
fn trace_person_scenario() {
    let route = Route::from_path("/trace/%E4%BA%BA");
    let Route::Trace(glyph) = route else {
        panic!("expected trace route");
    };
    let page = TracePage::resolve(&glyph, &cfg());
    assert_eq!(page.asset_url.as_deref(), Ok("/kanji/person.svg"));
    assert_eq!(page.meaning, "Person");
    assert_eq!(page.instructions.len(), 2);
    assert_eq!(page.instructions[0], "Draw the left diagonal stroke from top to bottom.");
}

#[test]
fn trace_unknown_glyph_scenario() {
    let page = TracePage::resolve("犬", &cfg());
    assert_eq!(page.meaning, "Unknown");
    assert_eq!(page.instructions, vec!["Stroke order data not available"]);
    assert!(page.asset_url.is_err());
}

#[test]
fn completed_stroke_is_evaluated_exactly_once() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut session = counting_session(calls.clone());
    let mut ink = CountingInk::default();
    session.handle_input(PenInput::Down(Point::new(10.0, 10.0)), &mut ink);
    for i in 1..=5 {
        session.handle_input(PenInput::Move(Point::new(10.0 + i as f64, 10.0)), &mut ink);
    }
    let verdict = session.handle_input(PenInput::Up, &mut ink);
    assert_eq!(verdict, Some(Feedback::Retry));
    assert_eq!(calls.get(), 1);
    assert_eq!(ink.live_segments, 5);
}

#[test]
fn leave_then_up_yields_one_completion() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut session = counting_session(calls.clone());
    let mut ink = CountingInk::default();
    session.handle_input(PenInput::Down(Point::new(0.0, 0.0)), &mut ink);
    session.handle_input(PenInput::Move(Point::new(5.0, 5.0)), &mut ink);
    assert!(session.handle_input(PenInput::Leave, &mut ink).is_some());
    assert!(session.handle_input(PenInput::Up, &mut ink).is_none());
    assert_eq!(calls.get(), 1);
}

#[test]
fn clear_always_leaves_empty_surface() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut session = counting_session(calls);
    let mut ink = CountingInk::default();
    session.clear(&mut ink);
    assert_eq!(ink.live_segments, 0);
    session.handle_input(PenInput::Down(Point::new(0.0, 0.0)), &mut ink);
    session.handle_input(PenInput::Move(Point::new(1.0, 0.0)), &mut ink);
    session.handle_input(PenInput::Up, &mut ink);
    session.clear(&mut ink);
    assert_eq!(ink.live_segments, 0);
    assert_eq!(session.last_feedback(), None);
}

#[test]
fn reveal_delays_follow_configured_stagger() {
    let c = cfg();
    let schedule = reveal_schedule(4, c.reveal_stagger_s, c.reveal_duration_s);
    let delays: Vec<f64> = schedule.iter().map(|r| r.delay_s).collect();
    assert_eq!(delays[0], 0.0);
    assert!(delays.windows(2).all(|w| w[1] > w[0]));
}
