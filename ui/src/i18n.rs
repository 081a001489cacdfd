//! Internationalization (i18n) support for `liftboard-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/liftboard-ui.ftl   (fallback/reference)
//!   es-ES/liftboard-ui.ftl
//!   fr-FR/liftboard-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! ```
//!
//! Month and weekday names are exposed to the heatmap engine through
//! [`LocalizedNames`], which implements `core::calendar::CalendarNames` on top
//! of the active bundle.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` is enabled for that target).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use time::{Date, Month, Weekday};
use unic_langid::LanguageIdentifier;

use crate::core::calendar::CalendarNames;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("heatmap-total", count = 12)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "liftboard-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
        // Tooltip and summary strings are plain text; skip bidi isolation marks.
        LOADER.set_use_isolating(false);
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    tracing::debug!(tag, "switched language");
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Calendar names from the active Fluent bundle.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalizedNames;

impl CalendarNames for LocalizedNames {
    fn month_short(&self, month: Month) -> String {
        match month {
            Month::January => crate::t!("month-short-jan"),
            Month::February => crate::t!("month-short-feb"),
            Month::March => crate::t!("month-short-mar"),
            Month::April => crate::t!("month-short-apr"),
            Month::May => crate::t!("month-short-may"),
            Month::June => crate::t!("month-short-jun"),
            Month::July => crate::t!("month-short-jul"),
            Month::August => crate::t!("month-short-aug"),
            Month::September => crate::t!("month-short-sep"),
            Month::October => crate::t!("month-short-oct"),
            Month::November => crate::t!("month-short-nov"),
            Month::December => crate::t!("month-short-dec"),
        }
    }

    fn month_long(&self, month: Month) -> String {
        match month {
            Month::January => crate::t!("month-long-jan"),
            Month::February => crate::t!("month-long-feb"),
            Month::March => crate::t!("month-long-mar"),
            Month::April => crate::t!("month-long-apr"),
            Month::May => crate::t!("month-long-may"),
            Month::June => crate::t!("month-long-jun"),
            Month::July => crate::t!("month-long-jul"),
            Month::August => crate::t!("month-long-aug"),
            Month::September => crate::t!("month-long-sep"),
            Month::October => crate::t!("month-long-oct"),
            Month::November => crate::t!("month-long-nov"),
            Month::December => crate::t!("month-long-dec"),
        }
    }

    fn weekday_short(&self, weekday: Weekday) -> String {
        match weekday {
            Weekday::Sunday => crate::t!("weekday-short-sun"),
            Weekday::Monday => crate::t!("weekday-short-mon"),
            Weekday::Tuesday => crate::t!("weekday-short-tue"),
            Weekday::Wednesday => crate::t!("weekday-short-wed"),
            Weekday::Thursday => crate::t!("weekday-short-thu"),
            Weekday::Friday => crate::t!("weekday-short-fri"),
            Weekday::Saturday => crate::t!("weekday-short-sat"),
        }
    }

    fn weekday_long(&self, weekday: Weekday) -> String {
        match weekday {
            Weekday::Sunday => crate::t!("weekday-long-sun"),
            Weekday::Monday => crate::t!("weekday-long-mon"),
            Weekday::Tuesday => crate::t!("weekday-long-tue"),
            Weekday::Wednesday => crate::t!("weekday-long-wed"),
            Weekday::Thursday => crate::t!("weekday-long-thu"),
            Weekday::Friday => crate::t!("weekday-long-fri"),
            Weekday::Saturday => crate::t!("weekday-long-sat"),
        }
    }
}

/// Locale-ordered long date ("Friday, March 15, 2024" / "viernes, 15 de marzo de 2024").
pub fn long_date(date: Date) -> String {
    let names = LocalizedNames;
    crate::t!(
        "heatmap-date-long",
        weekday = names.weekday_long(date.weekday()),
        month = names.month_long(date.month()),
        day = date.day().to_string(),
        year = date.year().to_string()
    )
}
