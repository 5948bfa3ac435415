use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdExternalLink;
use dioxus_free_icons::Icon;
use shared_types::SearchResult;
use shared_ui::{Badge, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle};

use crate::format_helpers::format_datetime_human;

/// Detail view of the selected result. Closed when `item` is `None`.
#[component]
pub fn PreviewDialog(item: Option<SearchResult>, on_close: EventHandler<()>) -> Element {
    let open = item.is_some();

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                if let Some(result) = item {
                    DialogTitle { "{result.title}" }
                    DialogDescription {
                        Badge { "{result.result_type.label()}" }
                        span { class: "preview-application", " {result.application}" }
                    }
                    dl { class: "preview-details",
                        if let Some(name) = result.document_name.as_deref().filter(|n| !n.is_empty()) {
                            dt { "Document" }
                            dd { "{name}" }
                        }
                        dt { "Retrieved" }
                        dd { "{format_datetime_human(&result.created_date)}" }
                    }
                    if let Some(text) = result.text.as_deref() {
                        blockquote { class: "preview-text", "{text}" }
                    }
                    div { class: "preview-actions",
                        if result.has_link() {
                            a {
                                class: "preview-link",
                                href: "{result.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon::<LdExternalLink> { icon: LdExternalLink, width: 16, height: 16 }
                                "Open source"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
