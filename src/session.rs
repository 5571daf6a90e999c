//! Per-visit tracing state: the guide paths once loaded, the pen tracker and
//! the last verdict. Created when the tracing page mounts, dropped with it.

use crate::feedback::{Feedback, StrokeEvaluator};
use crate::stroke_guide::StrokePath;
use crate::surface::{InkSurface, PenInput, StrokeTracker};

pub struct TracingSession {
    glyph: String,
    loaded_paths: Vec<StrokePath>,
    tracker: StrokeTracker,
    last_feedback: Option<Feedback>,
    evaluator: Box<dyn StrokeEvaluator>,
}

impl TracingSession {
    pub fn new(glyph: &str, evaluator: Box<dyn StrokeEvaluator>) -> Self {
        Self {
            glyph: glyph.to_string(),
            loaded_paths: Vec::new(),
            tracker: StrokeTracker::default(),
            last_feedback: None,
            evaluator,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn loaded_paths(&self) -> &[StrokePath] {
        &self.loaded_paths
    }

    pub fn set_loaded_paths(&mut self, paths: Vec<StrokePath>) {
        self.loaded_paths = paths;
    }

    pub fn is_drawing(&self) -> bool {
        self.tracker.is_drawing()
    }

    pub fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }

    /// Feed one pen input. Segments go straight to `ink`; a finished stroke
    /// is evaluated and its verdict returned.
    pub fn handle_input(&mut self, input: PenInput, ink: &mut dyn InkSurface) -> Option<Feedback> {
        match input {
            PenInput::Down(at) => {
                self.tracker.press(at);
                None
            }
            PenInput::Move(to) => {
                if let Some(segment) = self.tracker.drag(to) {
                    ink.draw_segment(&segment);
                }
                None
            }
            PenInput::Up | PenInput::Leave => {
                let stroke = self.tracker.release()?;
                let verdict = self.evaluator.evaluate(&stroke);
                self.last_feedback = Some(verdict);
                Some(verdict)
            }
        }
    }

    pub fn clear(&mut self, ink: &mut dyn InkSurface) {
        ink.clear();
        self.last_feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RandomEvaluator;
    use crate::surface::{Point, Segment};

    #[derive(Default)]
    struct RecordingInk {
        segments: Vec<Segment>,
        clears: usize,
    }

    impl InkSurface for RecordingInk {
        fn draw_segment(&mut self, segment: &Segment) {
            self.segments.push(*segment);
        }
        fn clear(&mut self) {
            self.segments.clear();
            self.clears += 1;
        }
    }

    fn session() -> TracingSession {
        TracingSession::new("人", Box::new(RandomEvaluator::with_sampler(0.3, || 0.9)))
    }

    #[test]
    fn test_moves_render_segments_only_while_drawing() {
        let mut s = session();
        let mut ink = RecordingInk::default();
        s.handle_input(PenInput::Move(Point::new(1.0, 1.0)), &mut ink);
        assert!(ink.segments.is_empty());
        s.handle_input(PenInput::Down(Point::new(0.0, 0.0)), &mut ink);
        assert!(s.is_drawing());
        s.handle_input(PenInput::Move(Point::new(2.0, 0.0)), &mut ink);
        s.handle_input(PenInput::Move(Point::new(4.0, 0.0)), &mut ink);
        assert_eq!(ink.segments.len(), 2);
    }

    #[test]
    fn test_leave_completes_like_up() {
        let mut s = session();
        let mut ink = RecordingInk::default();
        s.handle_input(PenInput::Down(Point::new(0.0, 0.0)), &mut ink);
        assert_eq!(s.handle_input(PenInput::Leave, &mut ink), Some(Feedback::Pass));
        assert!(!s.is_drawing());
        assert_eq!(s.handle_input(PenInput::Up, &mut ink), None);
    }

    #[test]
    fn test_clear_resets_feedback_and_ink() {
        let mut s = session();
        let mut ink = RecordingInk::default();
        s.handle_input(PenInput::Down(Point::new(0.0, 0.0)), &mut ink);
        s.handle_input(PenInput::Move(Point::new(3.0, 3.0)), &mut ink);
        s.handle_input(PenInput::Up, &mut ink);
        assert_eq!(s.last_feedback(), Some(Feedback::Pass));
        s.clear(&mut ink);
        s.clear(&mut ink);
        assert!(ink.segments.is_empty());
        assert_eq!(ink.clears, 2);
        assert_eq!(s.last_feedback(), None);
    }
}
