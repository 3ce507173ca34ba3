//! Validated parameter types shared by the transform and its callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROUNDING, HALF};
use crate::error::DecayError;
use crate::precision::{narrow, round_to_digits};

/// Number of periods after which a carried-over contribution halves.
///
/// Always finite and strictly positive. Fractional half-lives are allowed.
///
/// # Examples
///
/// ```
/// use adstock_core::types::HalfLife;
/// let h = HalfLife::new(2.0).unwrap();
/// assert!((h.decay_factor() - 0.5f64.sqrt()).abs() < 1e-15);
/// assert!(HalfLife::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HalfLife(f64);

impl HalfLife {
    pub fn new(periods: f64) -> Result<Self, DecayError> {
        if periods.is_finite() && periods > 0.0 {
            Ok(Self(periods))
        } else {
            Err(DecayError::InvalidHalfLife(periods))
        }
    }

    pub fn periods(&self) -> f64 {
        self.0
    }

    /// Per-period retention `exp(ln(0.5) / h)`, i.e. `0.5^(1/h)`.
    ///
    /// Lies in `[0, 1)`; it only reaches `0.0` when `h` is so small that the
    /// exponential underflows.
    pub fn decay_factor(&self) -> f64 {
        (HALF.ln() / self.0).exp()
    }
}

impl TryFrom<f64> for HalfLife {
    type Error = DecayError;

    fn try_from(periods: f64) -> Result<Self, Self::Error> {
        Self::new(periods)
    }
}

impl TryFrom<f32> for HalfLife {
    type Error = DecayError;

    fn try_from(periods: f32) -> Result<Self, Self::Error> {
        Self::new(f64::from(periods))
    }
}

impl From<HalfLife> for f64 {
    fn from(h: HalfLife) -> Self {
        h.0
    }
}

impl fmt::Display for HalfLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output precision: decimal digits kept before narrowing to `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precision(u32);

impl Precision {
    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    pub fn digits(&self) -> u32 {
        self.0
    }

    /// Round to [`digits`](Self::digits) decimals, then narrow to `f32`.
    pub fn apply(&self, value: f64) -> f32 {
        narrow(round_to_digits(value, self.0))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_ROUNDING)
    }
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Self(digits)
    }
}
