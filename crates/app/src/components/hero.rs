use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDatabase, LdFileText, LdSearch};
use dioxus_free_icons::Icon;

/// Page banner with the product name and feature labels.
#[component]
pub fn Hero() -> Element {
    rsx! {
        header { class: "hero",
            div { class: "hero-toolbar",
                shared_ui::theme::ThemeToggle {}
            }
            div { class: "hero-badge",
                Icon::<LdSearch> { icon: LdSearch, width: 32, height: 32 }
            }
            h1 { class: "hero-title", "RegTech Insight Search" }
            p { class: "hero-subtitle",
                "Discover and explore regulatory content across JIRA tickets, Confluence pages, and compliance links by jurisdiction"
            }
            ul { class: "hero-features",
                li { class: "hero-feature",
                    Icon::<LdDatabase> { icon: LdDatabase, width: 18, height: 18 }
                    span { "JIRA Integration" }
                }
                li { class: "hero-feature",
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                    span { "Confluence Pages" }
                }
                li { class: "hero-feature",
                    Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                    span { "Smart Search" }
                }
            }
        }
    }
}
