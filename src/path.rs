//! Generators of points spaced evenly by arc distance along a path.

use geo::{Bearing, Destination, Distance, Geodesic, Point};
use log::trace;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::error::SampleError;

/// Produces points spaced evenly by distance travelled along the path
/// between two positions.
///
/// Positions are `geo::Point`s in `(x: longitude, y: latitude)` order.
pub trait PathGenerator {
    /// Returns `n` points evenly spaced by arc distance from `start` to `end`.
    ///
    /// When `include_ends` is set the first and last points are exactly
    /// `start` and `end`, otherwise all `n` points lie strictly between them
    /// (at fractions `i / (n + 1)` of the path length).
    fn points(
        &self,
        start: Point,
        end: Point,
        n: usize,
        include_ends: bool,
    ) -> Result<Vec<Point>, SampleError>;

    /// Length of the path between `start` and `end`, in metres.
    fn length(&self, start: Point, end: Point) -> f64;
}

/// Geodesics on the WGS84 ellipsoid, as solved by geographiclib through
/// [`geo::Geodesic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GeodesicPath;

impl GeodesicPath {
    fn fractions(n: usize, include_ends: bool) -> impl Iterator<Item = f64> {
        let (offset, divisor) = match include_ends {
            true => (0, n.saturating_sub(1).max(1)),
            false => (1, n + 1),
        };

        (0..n).map(move |i| (i + offset) as f64 / divisor as f64)
    }
}

impl PathGenerator for GeodesicPath {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn points(
        &self,
        start: Point,
        end: Point,
        n: usize,
        include_ends: bool,
    ) -> Result<Vec<Point>, SampleError> {
        if n == 0 {
            return Err(SampleError::TooFewPoints(n));
        }

        let finite = |p: &Point| p.x().is_finite() && p.y().is_finite();
        if let Some(bad) = [start, end].into_iter().find(|p| !finite(p)) {
            return Err(SampleError::InvalidCoordinate(format!("{bad:?} is not finite")));
        }

        // One inverse solve, then a direct solve per point along the initial azimuth.
        let azimuth = Geodesic.bearing(start, end);
        let length = Geodesic.distance(start, end);
        trace!("Geodesic {start:?} -> {end:?}: azimuth={azimuth}, length={length}m, n={n}");

        let last = n - 1;
        Ok(Self::fractions(n, include_ends)
            .enumerate()
            .map(|(i, fraction)| match (include_ends, i) {
                (true, 0) => start,
                (true, i) if i == last => end,
                _ => Geodesic.destination(start, azimuth, length * fraction),
            })
            .collect())
    }

    fn length(&self, start: Point, end: Point) -> f64 {
        Geodesic.distance(start, end)
    }
}
