use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdHistory;
use dioxus_free_icons::Icon;
use shared_types::SearchQuery;
use shared_ui::{use_toast, Skeleton, TabContent, TabList, TabTrigger, Tabs, ToastOptions, Toasts};

use crate::components::{Hero, PreviewDialog, SearchForm, SearchResults, TokenInput};
use crate::controller::{Notice, SearchController, ServerCitationSource};
use crate::token_store::BrowserTokenStore;

/// Landing page. Waits for the stored token before building the controller.
#[component]
pub fn SearchPage() -> Element {
    let store = use_resource(BrowserTokenStore::open);
    let opened = store.read().clone();

    match opened {
        Some(store) => rsx! {
            SearchWorkspace { store }
        },
        None => rsx! {
            div { class: "search-page loading",
                Hero {}
                Skeleton { class: "skeleton-block" }
            }
        },
    }
}

fn show_notice(toast: Toasts, notice: &Notice) {
    let message = format!("{}: {}", notice.title, notice.description);
    if notice.is_error() {
        toast.error(message, ToastOptions::new());
    } else {
        toast.info(message, ToastOptions::new());
    }
}

#[component]
fn SearchWorkspace(store: BrowserTokenStore) -> Element {
    let toast = use_toast();
    let mut controller = use_signal(move || SearchController::new(ServerCitationSource, store));

    let view = controller.read().view().clone();
    let token = controller.read().token().to_string();
    let is_loading = view.is_loading();

    let run_search = move |query: SearchQuery| {
        let begun = controller.write().begin_search(&query);
        match begun {
            Err(notice) => show_notice(toast, &notice),
            Ok(pending) => {
                spawn(async move {
                    let source = *controller.peek().source();
                    let outcome = pending.run(&source).await;
                    let notice = controller.write().finish(outcome);
                    show_notice(toast, &notice);
                });
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        div { class: "search-page",
            Hero {}
            TokenInput {
                value: token,
                on_change: move |value: String| controller.write().set_token(value),
            }
            SearchForm {
                is_loading,
                on_search: run_search,
                on_invalid: move |message: String| show_notice(toast, &Notice::invalid_query(message)),
            }

            Tabs { default_value: "results", horizontal: true,
                TabList {
                    TabTrigger { value: "results", index: 0usize, "Search Results" }
                    TabTrigger { value: "history", index: 1usize, "Search History" }
                }
                TabContent { value: "results", index: 0usize,
                    SearchResults {
                        results: view.results.clone(),
                        is_loading,
                        on_select: move |result| controller.write().select(result),
                    }
                }
                TabContent { value: "history", index: 1usize,
                    div { class: "history-placeholder",
                        Icon::<LdHistory> { icon: LdHistory, width: 48, height: 48 }
                        h3 { "Search History" }
                        p { "Your search history will appear here once you start searching" }
                    }
                }
            }

            PreviewDialog {
                item: view.selected.clone(),
                on_close: move |_| controller.write().close_preview(),
            }
        }
    }
}
