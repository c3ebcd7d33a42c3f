use serde::{Deserialize, Serialize};

use crate::mode::SpacingMode;
use crate::sampler::GreatCircleSampler;
use crate::{DEFAULT_NPTS, DEFAULT_OVERSAMPLE};

/// Serialisable sampler settings, for callers which load them alongside the
/// rest of their pipeline configuration. Missing fields take their defaults.
///
/// ```rust
/// use gcproject::{SamplerConfig, SpacingMode};
///
/// let config = SamplerConfig { mode: SpacingMode::Lat, npts: 3, ..Default::default() };
/// let samples = config
///     .sampler()
///     .sample(geo::point! { x: 0.0, y: 0.0 }, geo::point! { x: 4.0, y: 2.0 })
///     .unwrap();
///
/// assert_eq!(samples.lats(), &[0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub mode: SpacingMode,
    pub npts: usize,
    pub oversample: usize,
    pub include_ends: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            mode: SpacingMode::default(),
            npts: DEFAULT_NPTS,
            oversample: DEFAULT_OVERSAMPLE,
            include_ends: true,
        }
    }
}

impl SamplerConfig {
    pub fn sampler(&self) -> GreatCircleSampler {
        GreatCircleSampler::new(self.mode)
            .points(self.npts)
            .oversample(self.oversample)
            .include_ends(self.include_ends)
    }
}

#[cfg(test)]
mod test {
    use super::SamplerConfig;
    use crate::mode::SpacingMode;

    #[test]
    fn defaults_match_the_entry_point() {
        let config = SamplerConfig::default();

        assert_eq!(config.mode, SpacingMode::Dist);
        assert_eq!(config.npts, 1001);
        assert_eq!(config.oversample, 10);
        assert!(config.include_ends);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SamplerConfig =
            serde_json::from_str(r#"{ "mode": "lon", "npts": 11 }"#).expect("Must parse");

        assert_eq!(config.mode, SpacingMode::Lon);
        assert_eq!(config.npts, 11);
        assert_eq!(config.oversample, 10);

        let sampler = config.sampler();
        assert_eq!(sampler.mode(), SpacingMode::Lon);
        assert_eq!(sampler.npts(), 11);
    }

    #[test]
    fn unknown_mode_fails_to_load() {
        let error = serde_json::from_str::<SamplerConfig>(r#"{ "mode": "foo" }"#)
            .expect_err("Must reject");

        assert!(error.to_string().contains("foo"), "{error}");
    }

    #[test]
    fn serialises_mode_by_name() {
        let json = serde_json::to_string(&SamplerConfig::default()).expect("Must serialise");
        assert!(json.contains(r#""mode":"dist""#), "{json}");
    }
}
