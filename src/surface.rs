//! Freehand tracing surface.
//!
//! `StrokeTracker` is the Idle/Drawing pen state machine; `CanvasInk` renders
//! its segments onto a 2D canvas. `DrawingSurface` wires mouse and touch
//! listeners on the canvas to a shared [`TracingSession`]. The listeners are
//! `gloo` handles, so dropping the surface detaches all of them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::config::StrokeStyle;
use crate::error::TraceError;
use crate::feedback::Feedback;
use crate::session::TracingSession;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Client (viewport) coordinates -> surface-local coordinates, given the
/// surface's bounding rectangle origin. Mouse and touch share this mapping.
pub fn to_local(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// The points of one finished down..up stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompletedStroke {
    pub points: Vec<Point>,
}

/// Input after coordinate mapping, independent of mouse vs touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PenInput {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PenState {
    Idle,
    Drawing { last: Point },
}

#[derive(Debug)]
pub struct StrokeTracker {
    state: PenState,
    points: Vec<Point>,
}

impl Default for StrokeTracker {
    fn default() -> Self {
        Self {
            state: PenState::Idle,
            points: Vec::new(),
        }
    }
}

impl StrokeTracker {
    pub fn state(&self) -> PenState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PenState::Drawing { .. })
    }

    /// Start a stroke at `at`. A press while already drawing restarts the
    /// stroke from the new point without completing the old one.
    pub fn press(&mut self, at: Point) {
        self.points.clear();
        self.points.push(at);
        self.state = PenState::Drawing { last: at };
    }

    /// Segment from the last point to `to`, or `None` while idle.
    pub fn drag(&mut self, to: Point) -> Option<Segment> {
        let PenState::Drawing { last } = self.state else {
            return None;
        };
        self.points.push(to);
        self.state = PenState::Drawing { last: to };
        Some(Segment { from: last, to })
    }

    /// Drawing -> Idle. Returns the finished stroke exactly once per stroke.
    pub fn release(&mut self) -> Option<CompletedStroke> {
        if !self.is_drawing() {
            return None;
        }
        self.state = PenState::Idle;
        Some(CompletedStroke {
            points: std::mem::take(&mut self.points),
        })
    }
}

/// Something segments can be drawn onto and wiped.
pub trait InkSurface {
    fn draw_segment(&mut self, segment: &Segment);
    fn clear(&mut self);
}

pub struct CanvasInk {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pen: StrokeStyle,
}

impl CanvasInk {
    pub fn new(canvas: HtmlCanvasElement, pen: StrokeStyle) -> Result<Self, TraceError> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| TraceError::Dom("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|_| TraceError::Dom("unexpected context type".into()))?;
        Ok(Self { canvas, ctx, pen })
    }
}

impl InkSurface for CanvasInk {
    fn draw_segment(&mut self, segment: &Segment) {
        self.ctx.set_stroke_style_str(self.pen.color);
        self.ctx.set_line_width(self.pen.width);
        self.ctx.set_line_cap(self.pen.line_cap);
        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

fn mouse_point(event: &MouseEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    to_local(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

/// First active touch; `None` once every finger has lifted.
fn touch_point(event: &TouchEvent, canvas: &HtmlCanvasElement) -> Option<Point> {
    let touch = event.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(to_local(
        touch.client_x() as f64,
        touch.client_y() as f64,
        rect.left(),
        rect.top(),
    ))
}

/// Maps a raw canvas event to pen input. Mouse and touch share `to_local`.
pub fn pen_input(event: &Event, canvas: &HtmlCanvasElement) -> Option<PenInput> {
    let kind = event.type_();
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return match kind.as_str() {
            "mousedown" => Some(PenInput::Down(mouse_point(mouse, canvas))),
            "mousemove" => Some(PenInput::Move(mouse_point(mouse, canvas))),
            "mouseup" => Some(PenInput::Up),
            "mouseleave" => Some(PenInput::Leave),
            _ => None,
        };
    }
    let touch = event.dyn_ref::<TouchEvent>()?;
    match kind.as_str() {
        "touchstart" => touch_point(touch, canvas).map(PenInput::Down),
        "touchmove" => touch_point(touch, canvas).map(PenInput::Move),
        "touchend" => Some(PenInput::Up),
        "touchcancel" => Some(PenInput::Leave),
        _ => None,
    }
}

const SURFACE_EVENTS: [&str; 8] = [
    "mousedown",
    "mousemove",
    "mouseup",
    "mouseleave",
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
];

/// Canvas plus its input listeners, alive for one tracing page visit.
pub struct DrawingSurface {
    ink: Rc<RefCell<CanvasInk>>,
    session: Rc<RefCell<TracingSession>>,
    feedback_el: Element,
    _listeners: Vec<EventListener>,
}

impl DrawingSurface {
    pub fn attach(
        canvas: HtmlCanvasElement,
        feedback_el: Element,
        session: Rc<RefCell<TracingSession>>,
        pen: StrokeStyle,
    ) -> Result<Self, TraceError> {
        let ink = Rc::new(RefCell::new(CanvasInk::new(canvas.clone(), pen)?));
        let options = EventListenerOptions::enable_prevent_default();
        let listeners = SURFACE_EVENTS
            .iter()
            .map(|&name| {
                let target = canvas.clone();
                let canvas = canvas.clone();
                let ink = ink.clone();
                let session = session.clone();
                let feedback_el = feedback_el.clone();
                EventListener::new_with_options(&target, name, options, move |event| {
                    event.prevent_default();
                    let Some(input) = pen_input(event, &canvas) else {
                        return;
                    };
                    let verdict = session
                        .borrow_mut()
                        .handle_input(input, &mut *ink.borrow_mut());
                    if let Some(feedback) = verdict {
                        render_feedback(&feedback_el, Some(feedback));
                    }
                })
            })
            .collect();
        Ok(Self {
            ink,
            session,
            feedback_el,
            _listeners: listeners,
        })
    }

    /// Wipe the canvas and the feedback line. The guide layer is untouched.
    pub fn clear(&self) {
        self.session.borrow_mut().clear(&mut *self.ink.borrow_mut());
        render_feedback(&self.feedback_el, None);
    }
}

pub(crate) fn render_feedback(el: &Element, feedback: Option<Feedback>) {
    match feedback {
        Some(feedback) => {
            el.set_text_content(Some(feedback.message()));
            let _ = el.set_attribute(
                "style",
                &format!("margin-top:1rem; font-size:1.2rem; color:{};", feedback.color()),
            );
        }
        None => {
            el.set_text_content(None);
            let _ = el.set_attribute("style", "display:none;");
        }
    }
}
