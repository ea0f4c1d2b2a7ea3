//! Strategies for finding the point where a segment crosses a meridian.

use crate::position::Position;

/// Finds the crossing of a segment with a meridian.
///
/// The cutter calls the interpolator every time a segment `a -> b` crosses a band edge. All returned positions are
/// appended to the slice which ends at the meridian, and the last of them also starts the next slice. So the last
/// position must lie on the meridian itself; any positions before it can be used to follow a curved (e.g. geodesic)
/// path between `a` and the meridian.
///
/// Any closure `Fn(f64, Position, Position) -> Vec<Position>` can be used as an interpolator.
pub trait Interpolator {
    /// Returns the positions between `a` and the crossing of the segment `a -> b` with the `meridian` longitude,
    /// ending with the crossing point.
    fn interpolate(&self, meridian: f64, a: Position, b: Position) -> Vec<Position>;
}

impl<F> Interpolator for F
where
    F: Fn(f64, Position, Position) -> Vec<Position>,
{
    fn interpolate(&self, meridian: f64, a: Position, b: Position) -> Vec<Position> {
        self(meridian, a, b)
    }
}

/// Treats segments as straight lines in longitude/latitude space.
///
/// The latitude of the crossing is rounded to 9 decimal places, so that both slices sharing the crossing point get
/// exactly the same value regardless of the segment direction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LinearInterpolator;

const VERTICAL_TOLERANCE: f64 = 1e-9;
const LATITUDE_PRECISION: f64 = 1e9;

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, meridian: f64, a: Position, b: Position) -> Vec<Position> {
        let lat = if (a.lon() - b.lon()).abs() < VERTICAL_TOLERANCE {
            a.lat()
        } else {
            let lat = a.lat() + (b.lat() - a.lat()) / (b.lon() - a.lon()) * (meridian - a.lon());
            (lat * LATITUDE_PRECISION).round() / LATITUDE_PRECISION
        };

        vec![Position::new(meridian, lat)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_crossing() {
        let crossing =
            LinearInterpolator.interpolate(180.0, Position::new(170.0, 10.0), Position::new(190.0, 20.0));
        assert_eq!(crossing, vec![Position::new(180.0, 15.0)]);
    }

    #[test]
    fn linear_crossing_is_rounded() {
        let crossing =
            LinearInterpolator.interpolate(-180.0, Position::new(-170.0, 0.0), Position::new(-193.0, 1.0));
        assert_eq!(crossing.len(), 1);
        assert_abs_diff_eq!(
            crossing[0],
            Position::new(-180.0, 10.0 / 23.0),
            epsilon = 1e-9
        );
        assert_eq!(crossing[0].lat(), 0.434782609);
    }

    #[test]
    fn vertical_segment_keeps_latitude() {
        let crossing =
            LinearInterpolator.interpolate(180.0, Position::new(180.0, 10.0), Position::new(180.0, 20.0));
        assert_eq!(crossing, vec![Position::new(180.0, 10.0)]);
    }

    #[test]
    fn closure_interpolator() {
        let midpoint = |meridian: f64, a: Position, b: Position| {
            vec![
                Position::new((a.lon() + meridian) / 2.0, a.lat()),
                Position::new(meridian, b.lat()),
            ]
        };
        let crossing = midpoint.interpolate(180.0, Position::new(170.0, 0.0), Position::new(190.0, 4.0));
        assert_eq!(
            crossing,
            vec![Position::new(175.0, 0.0), Position::new(180.0, 4.0)]
        );
    }
}
