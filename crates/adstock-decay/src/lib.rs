//! # adstock-decay — Half-life geometric decay engine.
//!
//! Each period's value is increased by a decaying fraction of the previous
//! period's carried value:
//! - **Decay factor**: `0.5^(1/h)` for half-life `h`, computed once as
//!   `exp(ln(0.5) / h)`.
//! - **Recurrence**: `a[0] = s[0]`, `a[i] = s[i] + a[i-1] * factor`, carried at
//!   full `f64` precision.
//! - **Output precision**: every element is rounded to a fixed number of
//!   decimals and narrowed to `f32` after the recurrence.

pub mod engine;

pub use engine::{apply_half_life, apply_half_life_default, HalfLifeDecay};
