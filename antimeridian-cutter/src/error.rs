//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutterError {
    /// A ring or a path of the input geometry has no positions.
    #[error("ring {ring} has no positions")]
    EmptyRing {
        /// Index of the ring inside its geometry.
        ring: usize,
    },
    /// A coordinate of the input geometry is NaN or infinite.
    #[error("non-finite coordinate at position {position} of ring {ring}")]
    NonFiniteCoordinate {
        /// Index of the ring inside its geometry.
        ring: usize,
        /// Index of the position inside the ring.
        position: usize,
    },
    /// Interpolator did not return a crossing point for a meridian.
    #[error("interpolator returned no positions for meridian {meridian}")]
    EmptyInterpolation {
        /// Longitude of the meridian that was crossed.
        meridian: f64,
    },
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
