//! Decay engine implementing the [`CarryoverTransform`] trait.
//!
//! Provides the half-life geometric decay: the per-period factor is derived
//! once from the half-life and the recurrence is a single sequential scan.
//! Carried values stay at `f64` precision; rounding and narrowing happen only
//! on the emitted elements.

use adstock_core::constants::DEFAULT_ROUNDING;
use adstock_core::error::DecayError;
use adstock_core::traits::CarryoverTransform;
use adstock_core::types::{HalfLife, Precision};
use tracing::{debug, warn};

/// The half-life geometric decay transform.
///
/// Implements [`CarryoverTransform`] with:
/// - Decay factor `exp(ln(0.5) / h)` precomputed at construction
/// - No carryover into the first period
/// - Configurable output precision (default 4 decimals)
#[derive(Debug, Clone, PartialEq)]
pub struct HalfLifeDecay {
    half_life: HalfLife,
    precision: Precision,
    factor: f64,
}

impl HalfLifeDecay {
    /// Create a decay transform for `half_life` periods.
    ///
    /// Fails with [`DecayError::InvalidHalfLife`] unless `half_life` is finite
    /// and strictly positive.
    pub fn new(half_life: f64) -> Result<Self, DecayError> {
        Ok(Self::from_half_life(HalfLife::new(half_life)?))
    }

    pub fn from_half_life(half_life: HalfLife) -> Self {
        Self {
            half_life,
            precision: Precision::default(),
            factor: half_life.decay_factor(),
        }
    }

    /// Replace the output precision.
    pub fn with_precision(mut self, precision: impl Into<Precision>) -> Self {
        self.precision = precision.into();
        self
    }

    pub fn half_life(&self) -> HalfLife {
        self.half_life
    }
}

impl CarryoverTransform for HalfLifeDecay {
    fn decay_factor(&self) -> f64 {
        self.factor
    }

    fn precision(&self) -> Precision {
        self.precision
    }

    fn accumulate(&self, series: &[f64]) -> Vec<f64> {
        debug!(
            periods = series.len(),
            half_life = %self.half_life,
            factor = self.factor,
            "accumulating carryover"
        );

        if let Some(index) = series.iter().position(|v| !v.is_finite()) {
            warn!(index, "non-finite input value; carryover is undefined from this period on");
        }

        let mut out = Vec::with_capacity(series.len());
        let mut carried = 0.0;
        for (i, &value) in series.iter().enumerate() {
            carried = if i == 0 { value } else { value + carried * self.factor };
            out.push(carried);
        }
        out
    }
}

/// Apply half-life decay to `series` and round every element to `rounding`
/// decimals, returning single-precision output of the same length.
///
/// The input is borrowed and left untouched. An empty series yields an
/// empty output.
///
/// # Examples
///
/// ```
/// use adstock_decay::apply_half_life;
/// let out = apply_half_life(&[10.0, 0.0, 0.0], 2.0, 4).unwrap();
/// assert_eq!(out, vec![10.0, 7.0711, 5.0]);
/// assert!(apply_half_life(&[1.0], 0.0, 4).is_err());
/// ```
pub fn apply_half_life(series: &[f64], half_life: f64, rounding: u32) -> Result<Vec<f32>, DecayError> {
    let engine = HalfLifeDecay::new(half_life)?.with_precision(rounding);
    Ok(engine.transform(series))
}

/// [`apply_half_life`] with the default output precision.
pub fn apply_half_life_default(series: &[f64], half_life: f64) -> Result<Vec<f32>, DecayError> {
    apply_half_life(series, half_life, DEFAULT_ROUNDING)
}
