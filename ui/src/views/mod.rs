mod home;
pub use home::Home;

mod activity;
pub use activity::Activity;

use time::Date;

use crate::core::{activity::ActivityRecord, sample};

/// Seed for the demo workout log shown until real data is wired in.
const DEMO_SEED: u64 = 0x11F7_B0A2;

/// Demo log for the window ending at `today`.
fn demo_records(today: Date) -> Vec<ActivityRecord> {
    sample::generate_activity(today, DEMO_SEED).unwrap_or_else(|err| {
        tracing::warn!(%err, "could not generate demo activity");
        Vec::new()
    })
}
