#![doc = include_str!("../readme.md")]

pub mod config;
#[doc(hidden)]
pub mod error;
pub mod index;
pub mod mode;
pub mod path;
pub mod sampler;
pub mod samples;
pub mod util;

/// WGS84 semi-major axis, in metres.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6378137.0;
/// WGS84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// Number of points returned when the caller does not ask for a count.
pub const DEFAULT_NPTS: usize = 1001;
/// Densification factor of the lookup path used by the `lon` and `lat` modes.
pub const DEFAULT_OVERSAMPLE: usize = 10;

#[doc(inline)]
pub use config::SamplerConfig;
#[doc(inline)]
pub use error::SampleError;
#[doc(inline)]
pub use index::AxisIndex;
#[doc(inline)]
pub use mode::SpacingMode;
#[doc(inline)]
pub use path::{GeodesicPath, PathGenerator};
#[doc(inline)]
pub use sampler::{linspace, GreatCircleSampler};
#[doc(inline)]
pub use samples::Samples;

/// Samples `npts` points along the WGS84 geodesic between the two endpoints,
/// spaced evenly according to `mode` (`dist`, `lon` or `lat`).
///
/// Returns the longitudes and latitudes as two index-aligned vectors.
///
/// ```rust
/// let (lons, lats) = gcproject::sample(0.0, 0.0, 10.0, 10.0, "lon", 11).unwrap();
/// assert_eq!(lons, (0..=10).map(f64::from).collect::<Vec<_>>());
/// assert_eq!(lats.len(), 11);
/// ```
pub fn sample(
    startlon: f64,
    startlat: f64,
    endlon: f64,
    endlat: f64,
    mode: &str,
    npts: usize,
) -> Result<(Vec<f64>, Vec<f64>), SampleError> {
    let mode = mode.parse::<SpacingMode>()?;

    GreatCircleSampler::new(mode)
        .points(npts)
        .sample(
            geo::point! { x: startlon, y: startlat },
            geo::point! { x: endlon, y: endlat },
        )
        .map(Samples::into_parts)
}
