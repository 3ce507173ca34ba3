//! Trait interface for carryover transforms.
//!
//! - [`CarryoverTransform`] — sequential carryover over a series (adstock-decay implements)

use crate::types::Precision;

/// A carryover transform over an ordered, equally spaced series.
///
/// Implementations hold their parameters; the series is always borrowed and
/// never mutated. Output always has the same length as input.
pub trait CarryoverTransform: Send + Sync {
    /// Per-period multiplier applied to the previous carried value.
    fn decay_factor(&self) -> f64;

    /// Output precision applied by [`transform`](Self::transform).
    fn precision(&self) -> Precision;

    /// Unrounded carryover series at full `f64` precision.
    ///
    /// `out[0] = series[0]`, `out[i] = series[i] + out[i - 1] * decay_factor()`.
    /// A non-finite input poisons every later element.
    fn accumulate(&self, series: &[f64]) -> Vec<f64>;

    /// Carryover series with the output precision applied to every element.
    ///
    /// Default implementation: [`accumulate`](Self::accumulate), then
    /// [`Precision::apply`] element-wise.
    fn transform(&self, series: &[f64]) -> Vec<f32> {
        let precision = self.precision();
        self.accumulate(series)
            .into_iter()
            .map(|v| precision.apply(v))
            .collect()
    }
}
