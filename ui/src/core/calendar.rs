//! Month and weekday names as a pluggable capability.
//!
//! The heatmap engine only reasons about `time::Month` / `time::Weekday`; the
//! strings shown to the user come from whichever `CalendarNames` the caller
//! hands in. `EnglishNames` lives here; the Fluent-backed implementation lives
//! in `crate::i18n`.

use time::{Month, Weekday};

pub trait CalendarNames {
    /// Abbreviated month name, e.g. "Mar".
    fn month_short(&self, month: Month) -> String;
    /// Full month name, e.g. "March".
    fn month_long(&self, month: Month) -> String;
    /// Abbreviated weekday name, e.g. "Mon".
    fn weekday_short(&self, weekday: Weekday) -> String;
    /// Full weekday name, e.g. "Monday".
    fn weekday_long(&self, weekday: Weekday) -> String;
}

/// en-US names, derived from the `Display` impls in `time`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishNames;

impl CalendarNames for EnglishNames {
    fn month_short(&self, month: Month) -> String {
        month.to_string().chars().take(3).collect()
    }

    fn month_long(&self, month: Month) -> String {
        month.to_string()
    }

    fn weekday_short(&self, weekday: Weekday) -> String {
        weekday.to_string().chars().take(3).collect()
    }

    fn weekday_long(&self, weekday: Weekday) -> String {
        weekday.to_string()
    }
}
