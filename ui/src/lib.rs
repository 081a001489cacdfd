//! Shared UI crate for Liftboard. The activity heatmap engine lives in
//! `core`; views and components render it for every platform.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Workout activity heatmap card (components/activity_heatmap.rs)
    pub mod activity_heatmap;
    pub use activity_heatmap::ActivityHeatmap;

    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
