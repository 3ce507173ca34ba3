//! Shared test helpers for integration and property tests.

use adstock_core::types::Precision;
use adstock_data::Observation;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Monday of the first week in generated tables.
pub fn first_week() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

/// Adstock computed directly from its recurrence, independent of the engine.
///
/// The carried value stays unrounded; rounding and narrowing are applied to
/// each emitted element.
pub fn reference_adstock(series: &[f64], half_life: f64, rounding: u32) -> Vec<f32> {
    let factor = (0.5f64.ln() / half_life).exp();
    let mut expected = series.to_vec();
    for i in 1..expected.len() {
        expected[i] += expected[i - 1] * factor;
    }
    let precision = Precision::new(rounding);
    expected.into_iter().map(|v| precision.apply(v)).collect()
}

/// One observation per week starting at [`first_week`].
pub fn weekly_observations(values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| Observation {
            date: first_week() + Days::new(7 * i as u64),
            value,
        })
        .collect()
}

/// Raw table in the layout of the original media export:
/// `date_week,tv_ad_executions` plus an unrelated spend column.
pub fn weekly_csv(values: &[f64]) -> String {
    let mut csv = String::from("date_week,tv_ad_executions,radio_spend\n");
    for obs in weekly_observations(values) {
        csv.push_str(&format!("{},{},{}\n", obs.date.format("%Y-%m-%d"), obs.value, 1.5));
    }
    csv
}

/// A year of weekly TV executions drawn from an exponential distribution
/// with mean `scale`, with every seventh week dark (zero).
pub fn exponential_weeks(seed: u64, weeks: usize, scale: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..weeks)
        .map(|i| {
            let u: f64 = rng.gen_range(0.0..1.0);
            if i % 7 == 0 { 0.0 } else { -scale * (1.0 - u).ln() }
        })
        .collect()
}

/// Flat spend with a heavier final quarter: 10 in the last 12 weeks of each
/// year, 5 otherwise.
pub fn seasonal_weeks(weeks: usize) -> Vec<f64> {
    (0..weeks)
        .map(|i| if i % 52 > 39 { 10.0 } else { 5.0 })
        .collect()
}

/// Number of digits after the decimal point in the shortest display form.
pub fn fractional_digits(value: f32) -> usize {
    let text = value.to_string();
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}
