//! Calendar heatmap card for a member's workout log.
//!
//! All layout decisions (dense series, week columns, month label columns,
//! intensity buckets, summary) come from `core::heatmap`; this component only
//! maps them onto markup, CSS classes and localized strings.

use dioxus::prelude::*;
use time::{Date, OffsetDateTime};

use crate::core::activity::ActivityRecord;
use crate::core::heatmap::{self, DenseDay, HeatmapOptions, IntensityLevel, WeekCell};
use crate::i18n::{self, LocalizedNames};
use crate::t;

/// Host calendar day, falling back to UTC when the local offset is unknown.
pub fn today_local() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[component]
pub fn ActivityHeatmap(
    records: Vec<ActivityRecord>,
    title: Option<String>,
    reference: Option<Date>,
    #[props(default)] options: HeatmapOptions,
) -> Element {
    // Re-render on language change so month and weekday names follow.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let hovered = use_signal(|| None::<DenseDay>);

    // Last day of the grid; the host's today unless the caller pins one.
    let reference = reference.unwrap_or_else(today_local);
    let title = title.unwrap_or_else(|| t!("heatmap-title"));

    let map = match heatmap::build(&records, reference, &options, &LocalizedNames) {
        Ok(map) => map,
        Err(err) => {
            tracing::warn!(%err, "activity heatmap unavailable");
            let reason = err.to_string();
            return rsx! {
                section { class: "heatmap-card",
                    div { class: "heatmap-card__header", h2 { "{title}" } }
                    p { class: "heatmap-card__error", {t!("heatmap-error", reason = reason)} }
                }
            };
        }
    };

    let weekday_labels = map.weekday_labels(&LocalizedNames);
    let grid_style = format!("--heatmap-columns: {};", map.weeks.len());
    let active_days = t!("heatmap-active-days", days = map.summary.active_days);
    let total = t!("heatmap-total", count = map.summary.total_events);
    let status = hovered().map(|day| tooltip_text(&day)).unwrap_or_default();

    rsx! {
        section { class: "heatmap-card",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "heatmap-card__header",
                h2 { "{title}" }
                div { class: "heatmap__legend",
                    span { {t!("heatmap-less")} }
                    for level in IntensityLevel::ALL {
                        span {
                            key: "{level.value()}",
                            class: format!("heatmap__swatch {}", level.css_class()),
                        }
                    }
                    span { {t!("heatmap-more")} }
                }
            }

            div { class: "heatmap", style: "{grid_style}",
                div { class: "heatmap__months",
                    for (index, label) in map.month_labels.iter().enumerate() {
                        span {
                            key: "{index}",
                            class: "heatmap__month",
                            style: format!("grid-column-start: {};", label.week_offset + 1),
                            "{label.name}"
                        }
                    }
                }

                div { class: "heatmap__body",
                    div { class: "heatmap__weekdays",
                        for (row, name) in weekday_labels.iter().enumerate() {
                            span { key: "{row}", class: weekday_class(row), "{name}" }
                        }
                    }
                    div { class: "heatmap__grid",
                        for (index, week) in map.weeks.iter().enumerate() {
                            div { key: "{index}", class: "heatmap__week",
                                for cell in week.cells.iter() {
                                    {render_cell(*cell, hovered)}
                                }
                            }
                        }
                    }
                }
            }

            p { class: "heatmap__status", aria_live: "polite", "{status}" }

            div { class: "heatmap-card__footer",
                span { "{active_days}" }
                span { "{total}" }
            }
        }
    }
}

/// Every other row is labelled, starting with the second.
fn weekday_class(row: usize) -> &'static str {
    if row % 2 == 1 {
        "heatmap__weekday"
    } else {
        "heatmap__weekday heatmap__weekday--hidden"
    }
}

fn render_cell(cell: WeekCell, mut hovered: Signal<Option<DenseDay>>) -> Element {
    let WeekCell::Day(day) = cell else {
        return rsx! {
            div { class: "heatmap__cell heatmap__cell--padding", aria_hidden: "true" }
        };
    };

    let tooltip = tooltip_text(&day);

    rsx! {
        div {
            class: format!("heatmap__cell {}", day.level().css_class()),
            title: "{tooltip}",
            tabindex: "0",
            onmouseenter: move |_| hovered.set(Some(day)),
            onmouseleave: move |_| hovered.set(None),
            onfocus: move |_| hovered.set(Some(day)),
            onblur: move |_| hovered.set(None),
        }
    }
}

fn tooltip_text(day: &DenseDay) -> String {
    t!("heatmap-tooltip", count = day.count, date = i18n::long_date(day.date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_alternate_rows() {
        assert!(weekday_class(0).contains("--hidden"));
        assert_eq!(weekday_class(1), "heatmap__weekday");
        assert!(weekday_class(6).contains("--hidden"));
    }

    #[test]
    fn tooltip_mentions_count_and_year() {
        i18n::init();
        let day = DenseDay {
            date: time::macros::date!(2024 - 03 - 15),
            count: 3,
        };
        let text = tooltip_text(&day);
        assert!(text.contains('3'));
        assert!(text.contains("2024"));
    }
}
