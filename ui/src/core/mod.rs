//! Pure, platform-agnostic logic shared by every view. Nothing in here touches
//! Dioxus; components call into these modules and render what comes back.

pub mod activity;
pub mod calendar;
pub mod heatmap;
pub mod sample;
