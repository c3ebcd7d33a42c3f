//! Sampling of evenly spaced positions along a great-circle path.
//!
//! The `dist` mode hands the path straight to the [`PathGenerator`]. The `lon`
//! and `lat` modes fix one coordinate to evenly spaced values and look the
//! other coordinate up on a densified path, matching the nearest key through
//! an [`AxisIndex`]. The lookup is an approximation bounded by the spacing of
//! the densified path, which is `oversample` times finer than the output.

use geo::Point;
use log::debug;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::error::SampleError;
use crate::index::AxisIndex;
use crate::mode::SpacingMode;
use crate::path::{GeodesicPath, PathGenerator};
use crate::samples::Samples;
use crate::{DEFAULT_NPTS, DEFAULT_OVERSAMPLE};


/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// The final value is exactly `end`. A single value yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = match n {
        0 | 1 => 0.0,
        n => (end - start) / (n - 1) as f64,
    };

    (0..n)
        .map(|i| match i {
            i if i + 1 == n && n > 1 => end,
            i => start + step * i as f64,
        })
        .collect()
}

/// The coordinate held evenly spaced by the `lon` and `lat` modes.
#[derive(Debug, Clone, Copy)]
enum Axis {
    Lon,
    Lat,
}

impl Axis {
    fn key(self, point: &Point) -> f64 {
        match self {
            Axis::Lon => point.x(),
            Axis::Lat => point.y(),
        }
    }

    fn other(self, point: &Point) -> f64 {
        match self {
            Axis::Lon => point.y(),
            Axis::Lat => point.x(),
        }
    }
}

/// Samples positions along the path between two points.
///
/// ```rust
/// use gcproject::{GreatCircleSampler, SpacingMode};
/// use geo::point;
///
/// let samples = GreatCircleSampler::new(SpacingMode::Lat)
///     .points(5)
///     .sample(point! { x: 0.0, y: 0.0 }, point! { x: 10.0, y: 20.0 })
///     .unwrap();
///
/// assert_eq!(samples.lats(), &[0.0, 5.0, 10.0, 15.0, 20.0]);
/// ```
#[derive(Debug, Clone)]
pub struct GreatCircleSampler<G = GeodesicPath> {
    mode: SpacingMode,
    npts: usize,
    oversample: usize,
    include_ends: bool,
    path: G,
}

impl GreatCircleSampler<GeodesicPath> {
    /// A sampler over WGS84 geodesics, returning [`DEFAULT_NPTS`] points.
    pub fn new(mode: SpacingMode) -> Self {
        GreatCircleSampler {
            mode,
            npts: DEFAULT_NPTS,
            oversample: DEFAULT_OVERSAMPLE,
            include_ends: true,
            path: GeodesicPath,
        }
    }
}

impl<G: PathGenerator> GreatCircleSampler<G> {
    /// Number of points to return.
    pub fn points(self, npts: usize) -> Self {
        Self { npts, ..self }
    }

    /// Densification factor of the lookup path used by the `lon` and `lat`
    /// modes. Values below one are raised to one.
    pub fn oversample(self, oversample: usize) -> Self {
        Self {
            oversample: oversample.max(1),
            ..self
        }
    }

    /// Whether the arc-distance path includes its endpoints. When unset, the
    /// path generator places every point strictly between them.
    pub fn include_ends(self, include_ends: bool) -> Self {
        Self {
            include_ends,
            ..self
        }
    }

    /// Replaces the path generator.
    pub fn path<P: PathGenerator>(self, path: P) -> GreatCircleSampler<P> {
        GreatCircleSampler {
            mode: self.mode,
            npts: self.npts,
            oversample: self.oversample,
            include_ends: self.include_ends,
            path,
        }
    }

    pub fn mode(&self) -> SpacingMode {
        self.mode
    }

    pub fn npts(&self) -> usize {
        self.npts
    }

    /// Samples the path from `start` to `end`, given as `(x: lon, y: lat)`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip(self)))]
    pub fn sample(&self, start: Point, end: Point) -> Result<Samples, SampleError> {
        if self.npts == 0 {
            return Err(SampleError::TooFewPoints(self.npts));
        }

        debug!(
            "Sampling {} points by {} from {start:?} to {end:?}",
            self.npts, self.mode
        );

        match self.mode {
            SpacingMode::Dist => self.by_distance(start, end),
            SpacingMode::Lon => self.by_axis(start, end, Axis::Lon),
            SpacingMode::Lat => self.by_axis(start, end, Axis::Lat),
        }
    }

    fn by_distance(&self, start: Point, end: Point) -> Result<Samples, SampleError> {
        Ok(self
            .path
            .points(start, end, self.npts, self.include_ends)?
            .into_iter()
            .collect())
    }

    fn by_axis(&self, start: Point, end: Point, axis: Axis) -> Result<Samples, SampleError> {
        let dense_npts = (self.npts - 1) * self.oversample + 1;
        let dense = self
            .path
            .points(start, end, dense_npts, self.include_ends)?;

        let index = AxisIndex::new(dense.iter().map(|p| axis.key(p)))?;
        debug!("Matching {:?} against {} dense points", axis, index.len());

        let targets = linspace(axis.key(&start), axis.key(&end), self.npts);
        let matched = targets
            .iter()
            .map(|&target| {
                index
                    .nearest(target)
                    .map(|position| axis.other(&dense[position]))
                    .ok_or(SampleError::EmptyIndex)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match axis {
            Axis::Lon => Samples::new(targets, matched),
            Axis::Lat => Samples::new(matched, targets),
        })
    }
}
