//! Disagreement scoring
//!
//! The scorer walks every ink pixel of the user mask and accumulates
//! cross-votes: a candidate's error grows wherever the user's ink
//! coincides with one of the *other two* candidates' outlines. A shape is
//! thus penalized for ink that looks like a different shape, not rewarded
//! for ink on its own outline. This overlap-confusion rule is preserved
//! from the reference behavior; it is not a distance metric.

use crate::classify::Shape;
use crate::error::{ClassifyError, ClassifyResult};
use strokeshape_render::ShapeCandidates;
use strokeshape_core::Mask;

/// Per-candidate disagreement scores; lower is better.
///
/// Each count is bounded by twice the stroke's ink pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorScores {
    pub square: u64,
    pub ellipse: u64,
    pub line: u64,
}

impl ErrorScores {
    /// The label with the strictly smallest score. Ties resolve in the
    /// fixed iteration order square, ellipse, line.
    pub fn best(&self) -> Shape {
        let mut best = Shape::Square;
        let mut min = self.square;
        if self.ellipse < min {
            best = Shape::Ellipse;
            min = self.ellipse;
        }
        if self.line < min {
            best = Shape::Line;
        }
        best
    }
}

/// Score the user mask against the three candidates.
///
/// # Errors
///
/// Returns [`ClassifyError::CandidateSizeMismatch`] if any candidate's
/// dimensions differ from the user mask's.
pub fn score_candidates(user: &Mask, candidates: &ShapeCandidates) -> ClassifyResult<ErrorScores> {
    for candidate in [&candidates.square, &candidates.ellipse, &candidates.line] {
        if candidate.width() != user.width() || candidate.height() != user.height() {
            return Err(ClassifyError::CandidateSizeMismatch {
                user: (user.width(), user.height()),
                candidate: (candidate.width(), candidate.height()),
            });
        }
    }

    let mut scores = ErrorScores::default();
    for y in 0..user.height() {
        for x in 0..user.width() {
            if !user.get_pixel_unchecked(x, y) {
                continue;
            }
            if candidates.line.get_pixel_unchecked(x, y) {
                scores.square += 1;
                scores.ellipse += 1;
            }
            if candidates.ellipse.get_pixel_unchecked(x, y) {
                scores.square += 1;
                scores.line += 1;
            }
            if candidates.square.get_pixel_unchecked(x, y) {
                scores.ellipse += 1;
                scores.line += 1;
            }
        }
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strokeshape_core::MaskMut;

    fn mask_with(pixels: &[(u32, u32)], w: u32, h: u32) -> Mask {
        let mut m = MaskMut::new(w, h);
        for &(x, y) in pixels {
            m.set_pixel(x, y, true).unwrap();
        }
        m.into()
    }

    fn candidates(
        square: &[(u32, u32)],
        ellipse: &[(u32, u32)],
        line: &[(u32, u32)],
        w: u32,
        h: u32,
    ) -> ShapeCandidates {
        ShapeCandidates {
            square: mask_with(square, w, h),
            ellipse: mask_with(ellipse, w, h),
            line: mask_with(line, w, h),
        }
    }

    #[test]
    fn test_cross_votes() {
        // Ink at three pixels, each covered by exactly one candidate
        let user = mask_with(&[(0, 0), (1, 0), (2, 0)], 4, 1);
        let cands = candidates(&[(0, 0)], &[(1, 0)], &[(2, 0)], 4, 1);
        let scores = score_candidates(&user, &cands).unwrap();
        // square pixel votes against ellipse+line, and so on around
        assert_eq!(
            scores,
            ErrorScores {
                square: 2,
                ellipse: 2,
                line: 2
            }
        );
    }

    #[test]
    fn test_ink_outside_candidates_scores_nothing() {
        let user = mask_with(&[(3, 0)], 4, 1);
        let cands = candidates(&[(0, 0)], &[(1, 0)], &[(2, 0)], 4, 1);
        let scores = score_candidates(&user, &cands).unwrap();
        assert_eq!(scores, ErrorScores::default());
    }

    #[test]
    fn test_overlapping_candidates_stack_votes() {
        // One ink pixel covered by all three candidates: every error
        // rises by 2
        let user = mask_with(&[(1, 1)], 3, 3);
        let cands = candidates(&[(1, 1)], &[(1, 1)], &[(1, 1)], 3, 3);
        let scores = score_candidates(&user, &cands).unwrap();
        assert_eq!(
            scores,
            ErrorScores {
                square: 2,
                ellipse: 2,
                line: 2
            }
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let user = mask_with(&[(0, 0)], 4, 4);
        let cands = candidates(&[], &[], &[], 5, 4);
        assert!(matches!(
            score_candidates(&user, &cands),
            Err(ClassifyError::CandidateSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_best_prefers_strict_minimum() {
        let scores = ErrorScores {
            square: 9,
            ellipse: 2,
            line: 5,
        };
        assert_eq!(scores.best(), Shape::Ellipse);
    }

    #[test]
    fn test_best_tie_break_order() {
        // All equal: square wins
        assert_eq!(ErrorScores::default().best(), Shape::Square);
        // ellipse and line tied below square: ellipse wins
        let scores = ErrorScores {
            square: 4,
            ellipse: 3,
            line: 3,
        };
        assert_eq!(scores.best(), Shape::Ellipse);
        // square and line tied at the minimum: square wins
        let scores = ErrorScores {
            square: 3,
            ellipse: 4,
            line: 3,
        };
        assert_eq!(scores.best(), Shape::Square);
    }
}
