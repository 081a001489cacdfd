//! Synthetic workout log for demos and previews.
//!
//! Weekdays are busier than weekends, January gets the New Year bump, summer
//! months run a little hot and December slumps. Seeded so a given
//! `(reference, seed)` pair always produces the same log.

use rand::{rngs::StdRng, Rng, SeedableRng};
use time::{Date, Month, Weekday};

use super::activity::ActivityRecord;
use super::heatmap::{window_start, HeatmapError, WINDOW_DAYS};

const WEEKDAY_CHANCE: f64 = 0.7;
const WEEKEND_CHANCE: f64 = 0.3;

/// Draw thresholds as fractions of the day's chance, highest count first.
const COUNT_TIERS: [(u32, f64); 4] = [(4, 0.05), (3, 0.1), (2, 0.3), (1, 0.8)];

/// Sparse log (only days with at least one workout) covering the same window
/// the heatmap builder uses for `reference`.
pub fn generate_activity(reference: Date, seed: u64) -> Result<Vec<ActivityRecord>, HeatmapError> {
    let start = window_start(reference)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let records = std::iter::successors(Some(start), |date| date.next_day())
        .take(WINDOW_DAYS)
        .filter_map(|date| {
            let chance = base_chance(date.weekday()) * seasonal_multiplier(date.month());
            let draw: f64 = rng.gen();
            workouts_for_draw(draw, chance).map(|count| ActivityRecord::on(date, count))
        })
        .collect();

    Ok(records)
}

fn base_chance(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Saturday | Weekday::Sunday => WEEKEND_CHANCE,
        _ => WEEKDAY_CHANCE,
    }
}

fn seasonal_multiplier(month: Month) -> f64 {
    match month {
        Month::January => 1.4,
        Month::May | Month::June | Month::July | Month::August => 1.2,
        Month::December => 0.8,
        _ => 1.0,
    }
}

fn workouts_for_draw(draw: f64, chance: f64) -> Option<u32> {
    COUNT_TIERS
        .iter()
        .find(|(_, fraction)| draw < chance * fraction)
        .map(|(count, _)| *count)
}
