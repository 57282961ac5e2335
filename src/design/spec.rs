//! Filter response shapes and design specifications.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FilterError, Result};

/// Quality factor of a maximally flat (Butterworth) second-order section.
pub const BUTTERWORTH_Q: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// The response shape a coefficient set is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FilterType {
    /// Low-pass filter - attenuates frequencies above the cutoff
    LowPass,
    /// High-pass filter - attenuates frequencies below the cutoff
    HighPass,
    /// Band-pass filter - passes frequencies near the center, attenuates others
    BandPass,
    /// All-pass filter - passes all frequencies but shifts phase
    AllPass,
    /// Peaking filter - boosts or cuts a band around the center frequency
    Peak,
    /// Low-shelf filter - boosts or cuts everything below the cutoff
    LowShelf,
    /// High-shelf filter - boosts or cuts everything above the cutoff
    HighShelf,
}

impl FilterType {
    /// Every response shape, in declaration order.
    pub const ALL: [FilterType; 7] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::AllPass,
        FilterType::Peak,
        FilterType::LowShelf,
        FilterType::HighShelf,
    ];

    /// Whether the design reads `gain_db`.
    pub fn uses_gain(self) -> bool {
        matches!(
            self,
            FilterType::Peak | FilterType::LowShelf | FilterType::HighShelf
        )
    }

    /// Kebab-case name, shared by `Display`, `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            FilterType::LowPass => "low-pass",
            FilterType::HighPass => "high-pass",
            FilterType::BandPass => "band-pass",
            FilterType::AllPass => "all-pass",
            FilterType::Peak => "peak",
            FilterType::LowShelf => "low-shelf",
            FilterType::HighShelf => "high-shelf",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown filter type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter type: {0}")]
pub struct ParseFilterTypeError(pub String);

impl FromStr for FilterType {
    type Err = ParseFilterTypeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FilterType::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| ParseFilterTypeError(s.to_string()))
    }
}

/// Design parameters for a second-order filter.
///
/// `frequency` is the cutoff (or center) frequency and `sample_rate` the rate
/// the filter will run at, both in Hz. `gain_db` is only read by the peaking
/// and shelving shapes; when absent it is taken as 0 dB.
///
/// The physically meaningful range is `0 < frequency < sample_rate / 2`.
/// Designs outside it are computed anyway, but may be degenerate or unstable;
/// use [`FilterSpec::nyquist_checked`] to reject them up front.
///
/// # Examples
///
/// ```
/// use warble::FilterSpec;
///
/// let spec = FilterSpec::new(1000.0, 48000.0).with_q(2.0).with_gain_db(6.0);
/// assert_eq!(spec.quality_factor, 2.0);
/// assert_eq!(spec.gain_db(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct FilterSpec {
    pub frequency: f64,
    pub sample_rate: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_quality_factor"))]
    pub quality_factor: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gain_db: Option<f64>,
}

#[cfg(feature = "serde")]
fn default_quality_factor() -> f64 {
    BUTTERWORTH_Q
}

impl FilterSpec {
    /// Creates a spec with a Butterworth quality factor and no gain.
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            frequency,
            sample_rate,
            quality_factor: BUTTERWORTH_Q,
            gain_db: None,
        }
    }

    pub fn with_q(mut self, quality_factor: f64) -> Self {
        self.quality_factor = quality_factor;
        self
    }

    pub fn with_gain_db(mut self, gain_db: f64) -> Self {
        self.gain_db = Some(gain_db);
        self
    }

    /// Gain in dB, defaulting to 0 dB (no change).
    pub fn gain_db(&self) -> f64 {
        self.gain_db.unwrap_or(0.0)
    }

    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Checks that every parameter the design equations divide by or take
    /// the sine of is positive and finite.
    pub fn validate(&self) -> Result<()> {
        positive("frequency", self.frequency)?;
        positive("sample_rate", self.sample_rate)?;
        positive("quality_factor", self.quality_factor)?;
        Ok(())
    }

    /// Validates the spec for a particular shape. On top of [`validate`],
    /// shapes that read `gain_db` require it to be finite; the others ignore
    /// it whatever its value.
    ///
    /// [`validate`]: Self::validate
    pub fn validate_for(&self, filter_type: FilterType) -> Result<()> {
        self.validate()?;
        if filter_type.uses_gain() {
            let gain_db = self.gain_db();
            if !gain_db.is_finite() {
                return Err(FilterError::invalid("gain_db", gain_db));
            }
        }
        Ok(())
    }

    /// Validates the spec and additionally rejects frequencies at or above
    /// the Nyquist frequency.
    ///
    /// ```
    /// use warble::FilterSpec;
    ///
    /// assert!(FilterSpec::new(1000.0, 48000.0).nyquist_checked().is_ok());
    /// assert!(FilterSpec::new(30000.0, 48000.0).nyquist_checked().is_err());
    /// ```
    pub fn nyquist_checked(self) -> Result<Self> {
        self.validate()?;
        if self.frequency >= self.nyquist() {
            return Err(FilterError::invalid("frequency", self.frequency));
        }
        Ok(self)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new(1000.0, 48000.0)
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FilterError::invalid(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = FilterSpec::default();
        assert_eq!(spec.frequency, 1000.0);
        assert_eq!(spec.sample_rate, 48000.0);
        assert_eq!(spec.quality_factor, BUTTERWORTH_Q);
        assert_eq!(spec.gain_db, None);
        assert_eq!(spec.gain_db(), 0.0);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let bad = [
            FilterSpec::new(0.0, 48000.0),
            FilterSpec::new(-100.0, 48000.0),
            FilterSpec::new(1000.0, 0.0),
            FilterSpec::new(1000.0, 48000.0).with_q(0.0),
            FilterSpec::new(1000.0, 48000.0).with_q(-1.0),
            FilterSpec::new(f64::NAN, 48000.0),
            FilterSpec::new(1000.0, f64::INFINITY),
        ];
        for spec in bad {
            assert!(
                matches!(spec.validate(), Err(FilterError::InvalidParameter { .. })),
                "expected rejection for {:?}",
                spec
            );
        }
    }

    #[test]
    fn test_validate_names_the_parameter() {
        let err = FilterSpec::new(1000.0, -1.0).validate().unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidParameter {
                name: "sample_rate",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_non_finite_gain_only_matters_to_gain_shapes() {
        let spec = FilterSpec::new(1000.0, 48000.0).with_gain_db(f64::NAN);
        assert!(spec.validate().is_ok());
        for ty in FilterType::ALL {
            assert_eq!(spec.validate_for(ty).is_err(), ty.uses_gain(), "{}", ty);
        }

        let spec = spec.with_gain_db(f64::INFINITY);
        assert!(matches!(
            spec.validate_for(FilterType::HighShelf),
            Err(FilterError::InvalidParameter { name: "gain_db", .. })
        ));
    }

    #[test]
    fn test_nyquist_checked() {
        assert!(FilterSpec::new(23999.0, 48000.0).nyquist_checked().is_ok());
        assert!(FilterSpec::new(24000.0, 48000.0).nyquist_checked().is_err());
        // The plain validator leaves the Nyquist bound to the caller
        assert!(FilterSpec::new(24000.0, 48000.0).validate().is_ok());
    }

    #[test]
    fn test_filter_type_names_round_trip() {
        for ty in FilterType::ALL {
            assert_eq!(ty.to_string().parse::<FilterType>(), Ok(ty));
        }
        assert!("notch".parse::<FilterType>().is_err());
    }

    #[test]
    fn test_uses_gain() {
        assert!(FilterType::Peak.uses_gain());
        assert!(FilterType::LowShelf.uses_gain());
        assert!(FilterType::HighShelf.uses_gain());
        assert!(!FilterType::LowPass.uses_gain());
        assert!(!FilterType::AllPass.uses_gain());
    }
}
