//! Frame-stepped animation of the winning line.

use crate::games::tictactoe::WinningLine;
use tracing::{debug, instrument};

/// Default progress added per frame.
pub const DEFAULT_STEP: f64 = 0.05;

/// Progress of the line drawn through a winning triple.
///
/// Starts at 0 and moves toward 1 by a fixed step each frame, reaching
/// exactly 1 after `ceil(1 / step)` frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAnimation {
    line: WinningLine,
    step: f64,
    frame: u32,
    total_frames: u32,
}

impl LineAnimation {
    /// Starts a new animation for `line`. Non-positive steps fall back to
    /// [`DEFAULT_STEP`].
    #[instrument]
    pub fn new(line: WinningLine, step: f64) -> Self {
        let step = if step > 0.0 && step.is_finite() {
            step.min(1.0)
        } else {
            DEFAULT_STEP
        };
        Self {
            line,
            step,
            frame: 0,
            total_frames: frames_for(step),
        }
    }

    /// The line being drawn.
    pub fn line(&self) -> WinningLine {
        self.line
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.is_complete() {
            1.0
        } else {
            (f64::from(self.frame) * self.step).min(1.0)
        }
    }

    /// Number of frames needed to reach the end cell.
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// True once the line reaches the end cell.
    pub fn is_complete(&self) -> bool {
        self.frame >= self.total_frames
    }

    /// Advances one frame. Returns `true` if progress changed.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.frame += 1;
        if self.is_complete() {
            debug!(frames = self.frame, "Winning line animation complete");
        }
        true
    }
}

/// `ceil(1 / step)`, treating ratios within rounding error of a whole
/// number as that number.
fn frames_for(step: f64) -> u32 {
    let ratio = 1.0 / step;
    let nearest = ratio.round();
    let frames = if (ratio - nearest).abs() < 1e-9 {
        nearest
    } else {
        ratio.ceil()
    };
    frames.clamp(1.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Coord;

    fn line() -> WinningLine {
        WinningLine::new(Coord::new(0, 0), Coord::new(2, 2))
    }

    fn run_to_end(anim: &mut LineAnimation) -> u32 {
        let mut frames = 0;
        while anim.advance() {
            frames += 1;
            assert!(anim.progress() <= 1.0);
        }
        frames
    }

    #[test]
    fn test_starts_at_zero() {
        let anim = LineAnimation::new(line(), 0.05);
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_complete());
    }

    #[test]
    fn test_completes_in_expected_frames() {
        let mut anim = LineAnimation::new(line(), 0.25);
        assert_eq!(run_to_end(&mut anim), 4);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_frame_count_is_ceil_of_inverse_step() {
        let cases = [
            (DEFAULT_STEP, 20),
            (0.1, 10),
            (0.2, 5),
            (0.3, 4),
            (1.0 / 3.0, 3),
            (0.01, 100),
            (0.4, 3),
            (1.0, 1),
        ];
        for (step, expected) in cases {
            let mut anim = LineAnimation::new(line(), step);
            assert_eq!(anim.total_frames(), expected, "step {step}");
            assert_eq!(run_to_end(&mut anim), expected, "step {step}");
            assert!(anim.is_complete());
            assert_eq!(anim.progress(), 1.0, "step {step}");
        }
    }

    #[test]
    fn test_step_point_one_not_complete_after_nine_frames() {
        let mut anim = LineAnimation::new(line(), 0.1);
        for _ in 0..9 {
            anim.advance();
        }
        assert!(!anim.is_complete());
        assert!(anim.progress() < 1.0);
        assert!(anim.advance());
        assert!(anim.is_complete());
        assert!(!anim.advance());
    }

    #[test]
    fn test_invalid_step_falls_back() {
        let mut anim = LineAnimation::new(line(), 0.0);
        anim.advance();
        assert_eq!(anim.progress(), DEFAULT_STEP);
        assert_eq!(LineAnimation::new(line(), f64::NAN).total_frames(), 20);
    }
}
