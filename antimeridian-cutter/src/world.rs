//! World copies along the longitude axis.
//!
//! A web map repeats the world every 360° of longitude. The copy with index `0` covers `[-180, 180]`, copy `k > 0`
//! covers `(180 + 360 (k - 1), 180 + 360 k]` and copy `k < 0` covers `[-180 + 360 k, -180 + 360 (k + 1))`, so both
//! antimeridians belong to the central copy and the outer edge of every other copy is inclusive.

/// Index of the world copy containing `lon`.
///
/// ```
/// use antimeridian_cutter::world_copy;
///
/// assert_eq!(world_copy(180.0), 0);
/// assert_eq!(world_copy(-180.0), 0);
/// assert_eq!(world_copy(190.0), 1);
/// assert_eq!(world_copy(-540.0), -1);
/// ```
pub fn world_copy(lon: f64) -> i32 {
    let factor = (lon - 180.0) / 360.0;
    let index = factor.ceil();
    if index == factor && index < 0.0 {
        index as i32 + 1
    } else {
        index as i32
    }
}

/// Moves `lon` into the central world copy `[-180, 180]`.
pub fn wrap_longitude(lon: f64) -> f64 {
    lon - copy_offset(world_copy(lon))
}

/// Longitude offset of the world copy with the given index.
pub(crate) fn copy_offset(index: i32) -> f64 {
    360.0 * index as f64
}

/// Partition of the longitude axis into 360° wide bands.
///
/// Bands are world copies shifted so that the band `0` is centered at `center`. With the center at `0` the bands are
/// exactly the world copies and their edges are the antimeridians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Bands {
    center: f64,
}

impl Bands {
    /// Bands matching the world copies.
    pub fn world_copies() -> Self {
        Self { center: 0.0 }
    }

    /// Bands with the band `0` spanning `center ± 180`.
    pub fn centered(center: f64) -> Self {
        Self { center }
    }

    /// Index of the band containing `lon`.
    pub fn band_of(&self, lon: f64) -> i32 {
        world_copy(lon - self.center)
    }

    /// Longitude of the edge between the band `from` and its neighbour `to`.
    pub fn edge(&self, from: i32, to: i32) -> f64 {
        let side = if to > from { 180.0 } else { -180.0 };
        self.center + side + copy_offset(from)
    }
}
