use dioxus::prelude::*;

use crate::models::stats::StatsSummary;

#[component]
pub fn StatsRow(stats: StatsSummary, loading: bool) -> Element {
    let cards = [
        ("Total Articles", stats.total.to_string(), "stat-total"),
        ("Original", stats.original.to_string(), "stat-original"),
        ("Updated", stats.updated.to_string(), "stat-updated"),
        ("Processing", stats.processing.to_string(), "stat-processing"),
        ("Failed", stats.failed.to_string(), "stat-failed"),
        (
            "Success Rate",
            format!("{}%", stats.success_rate()),
            "stat-rate",
        ),
    ];

    rsx! {
        section { class: "stats-section",
            h2 { class: "section-title", "Dashboard Overview" }
            div { class: "stats-row",
                for (title, value, color_class) in cards {
                    StatCard {
                        key: "{title}",
                        title,
                        value,
                        color_class,
                        loading,
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: String,
    color_class: &'static str,
    loading: bool,
) -> Element {
    rsx! {
        div { class: "stat-card {color_class}",
            div { class: "stat-title", "{title}" }
            if loading {
                div { class: "skeleton stat-skeleton" }
            } else {
                div { class: "stat-value", "{value}" }
            }
            div { class: "stat-bar" }
        }
    }
}
