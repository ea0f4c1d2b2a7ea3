//! Strategies for deciding whether a ring is nested inside another one.

use crate::bounding_rect::BoundingRect;
use crate::position::Position;

/// Decides whether `candidate` is a hole of the `outer` ring.
///
/// Both rings always belong to the same world copy. Any closure `Fn(&[Position], &[Position]) -> bool` can be used as
/// a hole test.
pub trait HoleTest {
    /// Returns true if `candidate` lies inside `outer`.
    fn is_hole(&self, candidate: &[Position], outer: &[Position]) -> bool;
}

impl<F> HoleTest for F
where
    F: Fn(&[Position], &[Position]) -> bool,
{
    fn is_hole(&self, candidate: &[Position], outer: &[Position]) -> bool {
        self(candidate, outer)
    }
}

/// Compares the bounding rectangles of the rings: the candidate is a hole if its rectangle is inside the outer one.
///
/// This is exact for valid polygons without self-intersections, where a ring can only be inside another ring if it is
/// a hole of it. Two separate rings with overlapping rectangles (e.g. a ring inside the bay of a C-shaped one) can be
/// misclassified. Use an exact point-in-polygon test if that matters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BoundingBoxContainment;

impl HoleTest for BoundingBoxContainment {
    fn is_hole(&self, candidate: &[Position], outer: &[Position]) -> bool {
        match (
            BoundingRect::from_positions(candidate.iter()),
            BoundingRect::from_positions(outer.iter()),
        ) {
            (Some(candidate), Some(outer)) => outer.contains(&candidate),
            _ => false,
        }
    }
}
