use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{AppError, SearchQuery};
use shared_ui::{
    Button, Card, CardContent, Checkbox, CheckboxIndicator, CheckboxState, Input, Label,
};
use validator::Validate;

pub const APPLICATION_OPTIONS: &[(&str, &str)] = &[("jira", "JIRA"), ("confluence", "Confluence")];

pub const LINK_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("regulation", "Regulation"),
    ("policy", "Policy"),
    ("guidance", "Guidance"),
    ("procedure", "Procedure"),
];

pub const JURISDICTION_OPTIONS: &[(&str, &str)] = &[
    ("us", "United States"),
    ("eu", "European Union"),
    ("uk", "United Kingdom"),
    ("apac", "Asia Pacific"),
];

/// Assemble and validate a query from the form fields.
///
/// Returns the keyword error message when validation fails.
pub fn build_query(
    keyword: &str,
    applications: &BTreeSet<String>,
    link_types: &BTreeSet<String>,
    jurisdictions: &BTreeSet<String>,
) -> Result<SearchQuery, String> {
    let query = SearchQuery {
        keyword: keyword.to_string(),
        applications: applications.clone(),
        link_types: link_types.clone(),
        jurisdictions: jurisdictions.clone(),
    };
    query.validate().map_err(|errors| {
        let err = AppError::from(errors);
        err.field_errors
            .get("keyword")
            .cloned()
            .unwrap_or(err.message)
    })?;
    Ok(query)
}

fn set_selected(set: &mut BTreeSet<String>, value: &str, checked: bool) {
    if checked {
        set.insert(value.to_string());
    } else {
        set.remove(value);
    }
}

/// Keyword box plus filter groups.
#[component]
pub fn SearchForm(
    is_loading: bool,
    on_search: EventHandler<SearchQuery>,
    #[props(default)] on_invalid: EventHandler<String>,
) -> Element {
    let mut keyword = use_signal(String::new);
    let mut keyword_error = use_signal(|| None::<String>);
    let applications = use_signal(BTreeSet::<String>::new);
    let link_types = use_signal(BTreeSet::<String>::new);
    let jurisdictions = use_signal(BTreeSet::<String>::new);

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        match build_query(
            &keyword.read(),
            &applications.read(),
            &link_types.read(),
            &jurisdictions.read(),
        ) {
            Ok(query) => {
                keyword_error.set(None);
                on_search.call(query);
            }
            Err(message) => {
                keyword_error.set(Some(message.clone()));
                on_invalid.call(message);
            }
        }
    };

    rsx! {
        Card { class: "search-card",
            CardContent {
                form { class: "search-form", onsubmit: handle_submit,
                    div { class: "search-row",
                        Input {
                            id: "keyword",
                            value: keyword(),
                            placeholder: "Search regulations, tickets, pages...",
                            on_input: move |e: FormEvent| keyword.set(e.value()),
                        }
                        Button { disabled: is_loading,
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            if is_loading { "Searching..." } else { "Search" }
                        }
                    }
                    if let Some(message) = keyword_error() {
                        p { class: "field-error", "{message}" }
                    }
                    div { class: "filter-groups",
                        FilterGroup { title: "Applications", group: "app", options: APPLICATION_OPTIONS, selected: applications }
                        FilterGroup { title: "Link Types", group: "link", options: LINK_TYPE_OPTIONS, selected: link_types }
                        FilterGroup { title: "Jurisdictions", group: "jur", options: JURISDICTION_OPTIONS, selected: jurisdictions }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterGroup(
    title: &'static str,
    group: &'static str,
    options: &'static [(&'static str, &'static str)],
    mut selected: Signal<BTreeSet<String>>,
) -> Element {
    rsx! {
        fieldset { class: "filter-group",
            legend { "{title}" }
            for (value, label) in options.iter().copied() {
                div { key: "{group}-{value}", class: "filter-option",
                    Checkbox {
                        id: "{group}-{value}",
                        default_checked: if selected.read().contains(value) { CheckboxState::Checked } else { CheckboxState::Unchecked },
                        on_checked_change: move |state: CheckboxState| {
                            set_selected(&mut selected.write(), value, state == CheckboxState::Checked);
                        },
                        CheckboxIndicator {}
                    }
                    Label { html_for: "{group}-{value}", "{label}" }
                }
            }
        }
    }
}
