use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, VariantArray};

use crate::error::SampleError;

/// Selects which quantity is evenly spaced along the sampled path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    AsRefStr,
    EnumCount,
    EnumIter,
    VariantArray,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(try_from = "String", into = "String")]
pub enum SpacingMode {
    /// Points are evenly spaced by geodesic arc distance.
    #[default]
    Dist,

    /// Longitudes are evenly spaced between the endpoints, latitudes are
    /// looked up on the geodesic.
    ///
    /// ### Note
    /// The lookup matches the nearest longitude on a densified path. Paths whose
    /// longitude is not monotonic along the arc (crossing a pole or the
    /// antimeridian) can match the wrong branch, and no correction is made.
    Lon,

    /// Latitudes are evenly spaced between the endpoints, longitudes are
    /// looked up on the geodesic.
    ///
    /// ### Note
    /// Mirrors [`SpacingMode::Lon`], with the same caveat for paths whose
    /// latitude is not monotonic along the arc.
    Lat,
}

impl FromStr for SpacingMode {
    type Err = SampleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SpacingMode::VARIANTS
            .iter()
            .find(|mode| mode.as_ref() == value)
            .copied()
            .ok_or_else(|| SampleError::InvalidMode(value.to_string()))
    }
}

impl TryFrom<String> for SpacingMode {
    type Error = SampleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpacingMode> for String {
    fn from(value: SpacingMode) -> Self {
        value.to_string()
    }
}
