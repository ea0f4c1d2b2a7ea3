//! Continuous longitude space.
//!
//! A segment between two positions is always read as going the shorter way round the globe. Unwrapping moves every
//! position by a multiple of 360° so that no segment of a path spans more than 180° of longitude.

use crate::position::Position;

/// Representative of `lon` (modulo 360) closest to `reference`.
///
/// Longitudes not further than 180° from the reference are returned as is.
pub(crate) fn nearest_longitude(reference: f64, lon: f64) -> f64 {
    let delta = lon - reference;
    if delta.abs() <= 180.0 {
        lon
    } else {
        lon - 360.0 * (delta / 360.0).round()
    }
}

/// Returns a copy of the path in continuous longitudes.
///
/// The first position is kept as is unless `start_near` is given, in which case it is moved next to that longitude.
///
/// An edge going from one antimeridian straight to the other one (e.g. from `-180` to `180`) runs along the border of
/// the map. Such edges are kept at their full 360° width, so that polygons covering the whole map (or a pole) are
/// not folded into a line.
pub(crate) fn unwrap_path(path: &[Position], start_near: Option<f64>) -> Vec<Position> {
    let mut unwrapped: Vec<Position> = Vec::with_capacity(path.len());
    let mut previous: Option<(f64, f64)> = None;

    for position in path {
        let raw = position.lon();
        let lon = match previous {
            Some((previous_raw, previous_lon)) if is_border_edge(previous_raw, raw) => {
                previous_lon + (raw - previous_raw)
            }
            Some((_, previous_lon)) => nearest_longitude(previous_lon, raw),
            None => start_near.map_or(raw, |reference| nearest_longitude(reference, raw)),
        };

        previous = Some((raw, lon));
        unwrapped.push(position.with_lon(lon));
    }

    unwrapped
}

fn is_border_edge(from: f64, to: f64) -> bool {
    from.abs() == 180.0 && to.abs() == 180.0 && (to - from).abs() == 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lons(path: &[Position]) -> Vec<f64> {
        path.iter().map(|p| p.lon()).collect()
    }

    #[test]
    fn nearest() {
        assert_eq!(nearest_longitude(-170.0, 165.0), -195.0);
        assert_eq!(nearest_longitude(170.0, -170.0), 190.0);
        assert_eq!(nearest_longitude(0.0, 180.0), 180.0);
        assert_eq!(nearest_longitude(0.0, -180.0), -180.0);
        assert_eq!(nearest_longitude(10.0, 730.0), 10.0);
    }

    #[test]
    fn unwraps_across_antimeridian() {
        let path = [
            Position::new(170.0, 10.0),
            Position::new(-170.0, 10.0),
            Position::new(-170.0, -10.0),
            Position::new(170.0, -10.0),
            Position::new(170.0, 10.0),
        ];
        assert_eq!(
            lons(&unwrap_path(&path, None)),
            vec![170.0, 190.0, 190.0, 170.0, 170.0]
        );
    }

    #[test]
    fn continuous_input_is_unchanged() {
        let path = [
            Position::new(100.0, 0.0),
            Position::new(250.0, 0.0),
            Position::new(400.0, 0.0),
        ];
        assert_eq!(unwrap_path(&path, None), path.to_vec());
    }

    #[test]
    fn start_near_reference() {
        let path = [Position::new(-5.0, 0.0), Position::new(10.0, 0.0)];
        assert_eq!(lons(&unwrap_path(&path, Some(260.0))), vec![355.0, 370.0]);
    }

    #[test]
    fn circles_the_pole() {
        let path = [
            Position::new(-180.0, -90.0),
            Position::new(-90.0, -60.0),
            Position::new(0.0, -60.0),
            Position::new(90.0, -60.0),
            Position::new(180.0, -60.0),
            Position::new(-90.0, -60.0),
        ];
        assert_eq!(
            lons(&unwrap_path(&path, None)),
            vec![-180.0, -90.0, 0.0, 90.0, 180.0, 270.0]
        );
    }

    #[test]
    fn border_edges_keep_full_width() {
        let world = [
            Position::new(-180.0, -90.0),
            Position::new(180.0, -90.0),
            Position::new(180.0, 90.0),
            Position::new(-180.0, 90.0),
            Position::new(-180.0, -90.0),
        ];
        assert_eq!(unwrap_path(&world, None), world.to_vec());

        let pole = [
            Position::new(0.0, -60.0),
            Position::new(90.0, -60.0),
            Position::new(180.0, -60.0),
            Position::new(180.0, -90.0),
            Position::new(-180.0, -90.0),
            Position::new(-180.0, -60.0),
            Position::new(-90.0, -60.0),
            Position::new(0.0, -60.0),
        ];
        assert_eq!(unwrap_path(&pole, None), pole.to_vec());
    }

    #[test]
    fn border_edge_follows_shifted_path() {
        let path = [
            Position::new(170.0, 0.0),
            Position::new(-180.0, 0.0),
            Position::new(180.0, 10.0),
        ];
        assert_eq!(lons(&unwrap_path(&path, None)), vec![170.0, 180.0, 540.0]);
    }
}
