//! Verdict shown after each completed stroke.
//!
//! The shipped evaluator does not look at the drawn points: it samples a
//! uniform random number and passes when it exceeds the configured threshold.
//! A geometric evaluator (distance from sampled stroke points to the guide
//! paths) can replace it through [`StrokeEvaluator`].

use std::cell::Cell;

use crate::surface::CompletedStroke;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Pass,
    Retry,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Pass => "✅ Great job!",
            Feedback::Retry => "❌ Try again",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Feedback::Pass => "green",
            Feedback::Retry => "red",
        }
    }
}

pub trait StrokeEvaluator {
    fn evaluate(&mut self, stroke: &CompletedStroke) -> Feedback;
}

/// Placeholder evaluator: pass iff `sample() > threshold`.
pub struct RandomEvaluator<S = fn() -> f64> {
    threshold: f64,
    sample: S,
}

impl RandomEvaluator {
    /// Evaluator backed by the browser's randomness.
    pub fn browser(threshold: f64) -> Self {
        Self {
            threshold,
            sample: browser_sample,
        }
    }
}

impl<S: FnMut() -> f64> RandomEvaluator<S> {
    pub fn with_sampler(threshold: f64, sample: S) -> Self {
        Self { threshold, sample }
    }
}

impl<S: FnMut() -> f64> StrokeEvaluator for RandomEvaluator<S> {
    fn evaluate(&mut self, _stroke: &CompletedStroke) -> Feedback {
        if (self.sample)() > self.threshold {
            Feedback::Pass
        } else {
            Feedback::Retry
        }
    }
}

/// Uniform sample in `[0, 1)`.
#[cfg(feature = "rng")]
fn browser_sample() -> f64 {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_err() {
        return clock_sample();
    }
    unit_from_bits(u64::from_le_bytes(bytes))
}

#[cfg(not(feature = "rng"))]
fn browser_sample() -> f64 {
    clock_sample()
}

thread_local! {
    static LCG_STATE: Cell<Option<u64>> = const { Cell::new(None) };
}

// Linear congruential generator seeded from performance.now(); not crypto secure.
fn clock_sample() -> f64 {
    LCG_STATE.with(|cell| {
        let seed = cell.get().unwrap_or_else(|| {
            web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| (p.now() * 1000.0) as u64)
                .unwrap_or(0)
        });
        let next = lcg_step(seed);
        cell.set(Some(next));
        unit_from_bits(next)
    })
}

fn lcg_step(state: u64) -> u64 {
    state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

/// Top 53 bits -> `[0, 1)`.
fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let stroke = CompletedStroke::default();
        let mut pass = RandomEvaluator::with_sampler(0.3, || 0.31);
        let mut edge = RandomEvaluator::with_sampler(0.3, || 0.3);
        let mut fail = RandomEvaluator::with_sampler(0.3, || 0.0);
        assert_eq!(pass.evaluate(&stroke), Feedback::Pass);
        assert_eq!(edge.evaluate(&stroke), Feedback::Retry);
        assert_eq!(fail.evaluate(&stroke), Feedback::Retry);
    }

    #[test]
    fn test_messages() {
        assert!(Feedback::Pass.message().starts_with('✅'));
        assert!(Feedback::Retry.message().starts_with('❌'));
        assert_eq!(Feedback::Retry.color(), "red");
    }

    #[test]
    fn test_unit_from_bits_range() {
        assert_eq!(unit_from_bits(0), 0.0);
        assert!(unit_from_bits(u64::MAX) < 1.0);
        let mut s = 42;
        for _ in 0..1000 {
            s = lcg_step(s);
            let u = unit_from_bits(s);
            assert!((0.0..1.0).contains(&u));
        }
    }
}
