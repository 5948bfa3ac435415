use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{ResultType, SearchResult};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton,
};

use crate::format_helpers::{citation_count_label, format_date_human, truncate_text};

const SUMMARY_CHARS: usize = 220;

pub fn badge_variant(result_type: ResultType) -> BadgeVariant {
    match result_type {
        ResultType::Jira => BadgeVariant::Primary,
        ResultType::Confluence => BadgeVariant::Secondary,
        ResultType::Cs => BadgeVariant::Outline,
    }
}

/// Result list with loading and empty states. Clicking a card selects it.
#[component]
pub fn SearchResults(
    results: Vec<SearchResult>,
    is_loading: bool,
    on_select: EventHandler<SearchResult>,
) -> Element {
    if is_loading {
        return rsx! {
            div { class: "results-loading",
                for i in 0..3 {
                    div { key: "{i}", class: "result-skeleton",
                        Skeleton { class: "skeleton-title" }
                        Skeleton { class: "skeleton-line" }
                        Skeleton { class: "skeleton-line short" }
                    }
                }
            }
        };
    }

    if results.is_empty() {
        return rsx! {
            div { class: "results-empty",
                Icon::<LdSearch> { icon: LdSearch, width: 48, height: 48 }
                h3 { "No results yet" }
                p { "Enter a keyword and run a search to see matching citations." }
            }
        };
    }

    let count_label = citation_count_label(results.len());

    rsx! {
        div { class: "results",
            p { class: "results-count", "{count_label}" }
            for (index, result) in results.into_iter().enumerate() {
                ResultCard { key: "{index}-{result.id}", result, on_select }
            }
        }
    }
}

#[component]
fn ResultCard(result: SearchResult, on_select: EventHandler<SearchResult>) -> Element {
    let summary = result
        .summary
        .as_deref()
        .map(|s| truncate_text(s, SUMMARY_CHARS))
        .unwrap_or_default();
    let created = format_date_human(&result.created_date);
    let selected = result.clone();

    rsx! {
        div {
            class: "result-item",
            role: "button",
            tabindex: "0",
            onclick: move |_| on_select.call(selected.clone()),
            Card { class: "result-card",
                CardHeader {
                    div { class: "result-meta",
                        Badge { variant: badge_variant(result.result_type), "{result.result_type.label()}" }
                        span { class: "result-application", "{result.application}" }
                        if result.internal_reference {
                            Badge { variant: BadgeVariant::Secondary, "Internal" }
                        }
                    }
                    CardTitle { "{result.title}" }
                    CardDescription { "{created}" }
                }
                if !summary.is_empty() {
                    CardContent {
                        p { class: "result-summary", "{summary}" }
                    }
                }
            }
        }
    }
}
