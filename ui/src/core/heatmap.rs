//! Activity heatmap layout engine.
//!
//! Turns a sparse workout log into the dense, week-aligned grid rendered by
//! `ActivityHeatmap`:
//!
//! 1. `build_dense_series`: one entry per day for the trailing 365 days,
//!    missing days back-filled with zero.
//! 2. `partition_into_weeks`: 7-cell columns, padded at both ends so every
//!    column starts on the configured weekday.
//! 3. `classify_intensity`: 0..=4 shading bucket, applied per cell by the
//!    renderer.
//! 4. `derive_month_labels`: which column each month label sits over.
//! 5. `summarize`: active days and total workouts.
//!
//! Every function is pure: the caller passes the reference date ("today")
//! explicitly, inputs are only borrowed, and the same inputs always produce
//! the same output.
//!
//! ```ignore
//! let today = heatmap::parse_reference_date("2024-03-15")?;
//! let map = heatmap::build_default(&records, today)?;
//! for week in &map.weeks {
//!     for cell in &week.cells { /* cell.level().css_class() ... */ }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{macros::format_description, Date, Duration, Month, Weekday};

use super::activity::ActivityRecord;
use super::calendar::{CalendarNames, EnglishNames};

/// Days covered by the trailing window, reference day included.
pub const WINDOW_DAYS: usize = 365;
pub const DAYS_PER_WEEK: usize = 7;
/// Number of month labels emitted, ending at the reference month.
pub const MONTH_LABELS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeatmapError {
    #[error("invalid reference date: {0}")]
    InvalidReferenceDate(String),
    #[error("reference date {0} leaves no room for a 365-day window")]
    ReferenceOutOfRange(Date),
}

/// Parse an ISO `YYYY-MM-DD` reference date. Anything else is rejected; the
/// engine never falls back to "today".
pub fn parse_reference_date(raw: &str) -> Result<Date, HeatmapError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|err| HeatmapError::InvalidReferenceDate(format!("{raw:?}: {err}")))
}

/// Build a reference date from numeric parts, rejecting impossible dates.
pub fn reference_date(year: i32, month: u8, day: u8) -> Result<Date, HeatmapError> {
    let month = Month::try_from(month).map_err(|err| {
        HeatmapError::InvalidReferenceDate(format!("{year}-{month:02}-{day:02}: {err}"))
    })?;
    Date::from_calendar_date(year, month, day).map_err(|err| {
        HeatmapError::InvalidReferenceDate(format!("{year}-{:02}-{day:02}: {err}", month as u8))
    })
}

/// One real calendar day of the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenseDay {
    pub date: Date,
    pub count: u32,
}

impl DenseDay {
    pub fn level(&self) -> IntensityLevel {
        classify_intensity(self.count)
    }
}

/// A grid cell: either a real day or padding that completes a partial week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WeekCell {
    Padding,
    Day(DenseDay),
}

impl WeekCell {
    pub fn day(&self) -> Option<&DenseDay> {
        match self {
            WeekCell::Padding => None,
            WeekCell::Day(day) => Some(day),
        }
    }

    pub fn is_padding(&self) -> bool {
        matches!(self, WeekCell::Padding)
    }

    /// Padding always reads as zero.
    pub fn count(&self) -> u32 {
        self.day().map(|day| day.count).unwrap_or(0)
    }

    pub fn level(&self) -> IntensityLevel {
        classify_intensity(self.count())
    }
}

/// One grid column, rows ordered by `weekday_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub cells: [WeekCell; DAYS_PER_WEEK],
}

impl Week {
    pub fn days(&self) -> impl Iterator<Item = &DenseDay> {
        self.cells.iter().filter_map(WeekCell::day)
    }
}

/// Weekday shown in the top row of every column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        }
    }

    /// Row index of `weekday` within a column.
    pub fn row_of(self, weekday: Weekday) -> usize {
        let row = match self {
            WeekStart::Sunday => weekday.number_days_from_sunday(),
            WeekStart::Monday => weekday.number_days_from_monday(),
        };
        usize::from(row)
    }
}

/// Weekdays in grid row order.
pub fn weekday_order(week_start: WeekStart) -> [Weekday; DAYS_PER_WEEK] {
    let mut order = [week_start.first_weekday(); DAYS_PER_WEEK];
    for row in 1..DAYS_PER_WEEK {
        order[row] = order[row - 1].next();
    }
    order
}

/// Shading bucket for a day's workout count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum IntensityLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityLevel {
    pub const ALL: [IntensityLevel; 5] = [
        IntensityLevel::None,
        IntensityLevel::Low,
        IntensityLevel::Medium,
        IntensityLevel::High,
        IntensityLevel::Max,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// CSS modifier for the cell swatch, e.g. `heatmap__cell--level-2`.
    pub fn css_class(self) -> &'static str {
        match self {
            IntensityLevel::None => "heatmap__cell--level-0",
            IntensityLevel::Low => "heatmap__cell--level-1",
            IntensityLevel::Medium => "heatmap__cell--level-2",
            IntensityLevel::High => "heatmap__cell--level-3",
            IntensityLevel::Max => "heatmap__cell--level-4",
        }
    }
}

impl From<IntensityLevel> for u8 {
    fn from(level: IntensityLevel) -> Self {
        level.value()
    }
}

pub fn classify_intensity(count: u32) -> IntensityLevel {
    match count {
        0 => IntensityLevel::None,
        1 => IntensityLevel::Low,
        2 => IntensityLevel::Medium,
        3 => IntensityLevel::High,
        _ => IntensityLevel::Max,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    pub year: i32,
    pub month: Month,
    /// Short month name from the `CalendarNames` used for the build.
    pub name: String,
    /// Column the label sits over.
    pub week_offset: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub active_days: usize,
    pub total_events: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapOptions {
    pub week_start: WeekStart,
}

/// Everything a renderer needs for one heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub reference: Date,
    pub week_start: WeekStart,
    pub series: Vec<DenseDay>,
    pub weeks: Vec<Week>,
    pub month_labels: Vec<MonthLabel>,
    pub summary: Summary,
}

impl Heatmap {
    /// Weekday names for the row headers, in grid order.
    pub fn weekday_labels(&self, names: &dyn CalendarNames) -> Vec<String> {
        weekday_order(self.week_start)
            .into_iter()
            .map(|weekday| names.weekday_short(weekday))
            .collect()
    }
}

/// First day of the window ending at `reference`.
pub fn window_start(reference: Date) -> Result<Date, HeatmapError> {
    reference
        .checked_sub(Duration::days(WINDOW_DAYS as i64 - 1))
        .ok_or(HeatmapError::ReferenceOutOfRange(reference))
}

/// Gap-filled daily counts for `[reference - 364d, reference]`.
///
/// Later records win over earlier ones for the same date. Records outside the
/// window or with malformed dates are ignored.
pub fn build_dense_series(
    records: &[ActivityRecord],
    reference: Date,
) -> Result<Vec<DenseDay>, HeatmapError> {
    let start = window_start(reference)?;

    let mut malformed = 0usize;
    let lookup: HashMap<Date, u32> = records
        .iter()
        .filter_map(|record| {
            let day = record.day();
            if day.is_none() {
                malformed += 1;
            }
            day.map(|date| (date, record.count))
        })
        .filter(|(date, _)| (start..=reference).contains(date))
        .collect();

    if malformed > 0 {
        tracing::debug!(malformed, "skipped activity records with unreadable dates");
    }

    let series = std::iter::successors(Some(start), |date| date.next_day())
        .take(WINDOW_DAYS)
        .map(|date| DenseDay {
            date,
            count: lookup.get(&date).copied().unwrap_or(0),
        })
        .collect();

    Ok(series)
}

/// Split the dense series into 7-day columns starting on `week_start`.
///
/// Padding is only ever added before the first real day and after the last.
pub fn partition_into_weeks(series: &[DenseDay], week_start: WeekStart) -> Vec<Week> {
    let leading = series
        .first()
        .map(|day| week_start.row_of(day.date.weekday()))
        .unwrap_or(0);

    let cells: Vec<WeekCell> = std::iter::repeat(WeekCell::Padding)
        .take(leading)
        .chain(series.iter().copied().map(WeekCell::Day))
        .collect();

    cells
        .chunks(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut week = Week {
                cells: [WeekCell::Padding; DAYS_PER_WEEK],
            };
            week.cells[..chunk.len()].copy_from_slice(chunk);
            week
        })
        .collect()
}

/// Month label columns for the 12 months ending at the series' last month.
///
/// Offsets are `floor(days from series start to the 1st of the month / 7)`,
/// clamped into `0..weeks.len()`. This ignores leading padding, so a label can
/// land one column away from the column that actually holds the 1st. The
/// offsets are non-decreasing, which is all the renderer relies on.
pub fn derive_month_labels(
    series: &[DenseDay],
    weeks: &[Week],
    names: &dyn CalendarNames,
) -> Vec<MonthLabel> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };
    let last_column = weeks.len().saturating_sub(1);

    (0..MONTH_LABELS)
        .rev()
        .filter_map(|back| {
            let (year, month) = months_before(last.date.year(), last.date.month(), back);
            // Only fails at the very bottom of the supported calendar.
            let month_start = Date::from_calendar_date(year, month, 1).ok()?;
            let days = (month_start - first.date).whole_days();
            let offset = usize::try_from(days.div_euclid(DAYS_PER_WEEK as i64)).unwrap_or(0);
            Some(MonthLabel {
                year,
                month,
                name: names.month_short(month),
                week_offset: offset.min(last_column),
            })
        })
        .collect()
}

fn months_before(year: i32, month: Month, back: usize) -> (i32, Month) {
    (0..back).fold((year, month), |(year, month), _| match month {
        Month::January => (year - 1, Month::December),
        _ => (year, month.previous()),
    })
}

pub fn summarize(series: &[DenseDay]) -> Summary {
    series.iter().fold(Summary::default(), |mut summary, day| {
        if day.count > 0 {
            summary.active_days += 1;
        }
        summary.total_events += u64::from(day.count);
        summary
    })
}

/// Run the whole pipeline for one snapshot of records.
pub fn build(
    records: &[ActivityRecord],
    reference: Date,
    options: &HeatmapOptions,
    names: &dyn CalendarNames,
) -> Result<Heatmap, HeatmapError> {
    let series = build_dense_series(records, reference)?;
    let weeks = partition_into_weeks(&series, options.week_start);
    let month_labels = derive_month_labels(&series, &weeks, names);
    let summary = summarize(&series);

    tracing::trace!(
        %reference,
        records = records.len(),
        weeks = weeks.len(),
        active_days = summary.active_days,
        total_events = summary.total_events,
        "built activity heatmap"
    );

    Ok(Heatmap {
        reference,
        week_start: options.week_start,
        series,
        weeks,
        month_labels,
        summary,
    })
}

/// `build` with Sunday-first columns and English month names.
pub fn build_default(records: &[ActivityRecord], reference: Date) -> Result<Heatmap, HeatmapError> {
    build(records, reference, &HeatmapOptions::default(), &EnglishNames)
}
