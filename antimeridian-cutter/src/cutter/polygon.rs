//! Rebuilding polygons from ring slices.
//!
//! After splitting, the pieces of one ring can end up nested in each other (a piece of an outer ring forming a hole
//! of another piece of the same band) or open (a piece that needs other pieces of the same band to get back to its
//! start). The passes in this module run in a fixed order over owned values:
//!
//! 1. [`separate_nested`] moves nested pieces out to the hole list until no piece is nested in another one.
//! 2. [`close_rings`] joins the remaining pieces band-wise into closed rings.
//! 3. [`assign_holes`] attaches every hole to an outer ring of its band.

use std::collections::VecDeque;

use log::debug;

use crate::cutter::split::Slice;
use crate::hole::HoleTest;

/// Splits the slices of a ring into outer candidates and holes.
///
/// A slice nested inside another slice of the same band is a hole of it. Holes are closed right away. The search is
/// repeated until no slice left in the outer list is nested inside another one.
pub(crate) fn separate_nested<H>(slices: Vec<Slice>, hole_test: &H) -> (Vec<Slice>, Vec<Slice>)
where
    H: HoleTest + ?Sized,
{
    let mut outers = slices;
    let mut holes = Vec::new();

    while let Some(index) = find_nested(&outers, hole_test) {
        let mut hole = outers.remove(index);
        hole.force_close();

        debug!("Ring piece in band {} is a hole of another piece", hole.band);
        holes.push(hole);
    }

    (outers, holes)
}

fn find_nested<H>(slices: &[Slice], hole_test: &H) -> Option<usize>
where
    H: HoleTest + ?Sized,
{
    slices.iter().enumerate().find_map(|(outer_index, outer)| {
        slices
            .iter()
            .enumerate()
            .position(|(index, candidate)| {
                index != outer_index
                    && candidate.band == outer.band
                    && hole_test.is_hole(&candidate.points, &outer.points)
            })
    })
}

/// Joins open slices into closed rings.
///
/// Every open slice is extended with the following slices of the same band, in order, until it returns to its start.
/// When no slices of the band are left, the ring is closed by repeating its first point.
pub(crate) fn close_rings(slices: Vec<Slice>) -> Vec<Slice> {
    let mut pending: VecDeque<Slice> = slices.into();
    let mut rings = Vec::with_capacity(pending.len());

    while let Some(mut ring) = pending.pop_front() {
        while !ring.is_closed() {
            let next = pending
                .iter()
                .position(|slice| slice.band == ring.band)
                .and_then(|index| pending.remove(index));

            match next {
                Some(next) => ring.append(next),
                None => {
                    debug!("Force closing ring in band {}", ring.band);
                    ring.force_close();
                }
            }
        }

        rings.push(ring);
    }

    rings
}

/// Polygon rebuilt from slices: the outer ring followed by its holes, all from the same band.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SlicedPolygon {
    pub band: i32,
    pub rings: Vec<Slice>,
}

/// Attaches holes to the outer rings of their bands.
///
/// If a band has a single outer ring, all holes of the band belong to it. Otherwise every outer ring, in order, takes
/// the remaining holes of its band which pass the `hole_test`. Holes that find no outer ring are dropped.
pub(crate) fn assign_holes<H>(outers: Vec<Slice>, holes: Vec<Slice>, hole_test: &H) -> Vec<SlicedPolygon>
where
    H: HoleTest + ?Sized,
{
    let bands: Vec<i32> = outers.iter().map(|outer| outer.band).collect();
    let mut holes = holes;
    let mut polygons = Vec::with_capacity(outers.len());

    for outer in outers {
        let single = bands.iter().filter(|&&band| band == outer.band).count() == 1;
        let (own, rest): (Vec<Slice>, Vec<Slice>) = holes.into_iter().partition(|hole| {
            hole.band == outer.band && (single || hole_test.is_hole(&hole.points, &outer.points))
        });
        holes = rest;

        let band = outer.band;
        let mut rings = Vec::with_capacity(own.len() + 1);
        rings.push(outer);
        rings.extend(own);
        polygons.push(SlicedPolygon { band, rings });
    }

    if !holes.is_empty() {
        debug!("Dropping {} holes without an outer ring", holes.len());
    }

    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::BoundingBoxContainment;
    use crate::position::Position;

    fn p(lon: f64, lat: f64) -> Position {
        Position::new(lon, lat)
    }

    fn square(band: i32, lon: f64, lat: f64, size: f64) -> Slice {
        Slice::new(
            band,
            vec![
                p(lon, lat),
                p(lon + size, lat),
                p(lon + size, lat + size),
                p(lon, lat + size),
                p(lon, lat),
            ],
        )
    }

    #[test]
    fn nested_piece_becomes_hole() {
        let outer = Slice::new(0, vec![p(180.0, -10.0), p(100.0, -10.0), p(100.0, 10.0), p(180.0, 10.0)]);
        let inner = Slice::new(0, vec![p(180.0, 5.0), p(150.0, 5.0), p(150.0, -5.0), p(180.0, -5.0)]);
        let other_band = Slice::new(1, vec![p(180.0, 5.0), p(170.0, 5.0), p(170.0, -5.0), p(180.0, -5.0)]);

        let (outers, holes) = separate_nested(
            vec![outer.clone(), inner, other_band.clone()],
            &BoundingBoxContainment,
        );

        assert_eq!(outers, vec![outer, other_band]);
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].points.first(), holes[0].points.last());
        assert_eq!(holes[0].points.len(), 5);
    }

    #[test]
    fn separate_bands_are_never_nested() {
        let (outers, holes) = separate_nested(
            vec![square(0, 0.0, 0.0, 10.0), square(1, 2.0, 2.0, 1.0)],
            &BoundingBoxContainment,
        );
        assert_eq!(outers.len(), 2);
        assert!(holes.is_empty());
    }

    #[test]
    fn closes_single_slice() {
        let rings = close_rings(vec![Slice::new(
            1,
            vec![p(180.0, 10.0), p(190.0, 10.0), p(190.0, -10.0), p(180.0, -10.0)],
        )]);
        assert_eq!(rings.len(), 1);
        assert!(rings[0].is_closed());
        assert_eq!(rings[0].points.len(), 5);
    }

    #[test]
    fn joins_pieces_of_the_same_band() {
        let first = Slice::new(0, vec![p(180.0, 20.0), p(170.0, 20.0), p(170.0, 30.0), p(180.0, 30.0)]);
        let other = Slice::new(1, vec![p(180.0, 30.0), p(190.0, 30.0), p(180.0, 20.0)]);
        let second = Slice::new(0, vec![p(180.0, 30.0), p(175.0, 40.0), p(180.0, 20.0)]);

        let rings = close_rings(vec![first, other, second]);

        assert_eq!(rings.len(), 2);
        assert_eq!(
            rings[0].points,
            vec![
                p(180.0, 20.0),
                p(170.0, 20.0),
                p(170.0, 30.0),
                p(180.0, 30.0),
                p(175.0, 40.0),
                p(180.0, 20.0),
            ]
        );
        assert_eq!(rings[1].band, 1);
        assert!(rings.iter().all(Slice::is_closed));
    }

    #[test]
    fn degenerate_slice_is_closed() {
        let rings = close_rings(vec![Slice::new(0, vec![p(180.0, 0.0), p(170.0, 0.0)])]);
        assert!(rings[0].is_closed());
        assert_eq!(rings[0].points.len(), 4);
    }

    #[test]
    fn single_outer_takes_all_holes() {
        let polygons = assign_holes(
            vec![square(0, 0.0, 0.0, 10.0), square(1, 0.0, 0.0, 10.0)],
            vec![square(0, 50.0, 50.0, 1.0), square(1, 2.0, 2.0, 1.0)],
            &BoundingBoxContainment,
        );

        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].rings.len(), 2);
        assert_eq!(polygons[0].rings[1], square(0, 50.0, 50.0, 1.0));
        assert_eq!(polygons[1].rings.len(), 2);
        assert_eq!(polygons[1].band, 1);
    }

    #[test]
    fn several_outers_use_hole_test() {
        let polygons = assign_holes(
            vec![square(0, 0.0, 0.0, 10.0), square(0, 20.0, 0.0, 10.0)],
            vec![square(0, 22.0, 2.0, 1.0), square(0, 2.0, 2.0, 1.0), square(0, 50.0, 0.0, 1.0)],
            &BoundingBoxContainment,
        );

        assert_eq!(polygons[0].rings, vec![square(0, 0.0, 0.0, 10.0), square(0, 2.0, 2.0, 1.0)]);
        assert_eq!(polygons[1].rings, vec![square(0, 20.0, 0.0, 10.0), square(0, 22.0, 2.0, 1.0)]);
    }
}
