use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdKey};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label};

/// API token field with a show/hide toggle.
///
/// Every keystroke is reported through `on_change`; the caller persists it.
#[component]
pub fn TokenInput(value: String, on_change: EventHandler<String>) -> Element {
    let mut show_token = use_signal(|| false);
    let input_type = if show_token() { "text" } else { "password" };

    rsx! {
        Card { class: "token-card",
            CardHeader {
                CardTitle {
                    Icon::<LdKey> { icon: LdKey, width: 18, height: 18 }
                    span { "API Configuration" }
                }
            }
            CardContent {
                Label { html_for: "api-token", "Nucleus API Token" }
                div { class: "token-row",
                    Input {
                        id: "api-token",
                        input_type: "{input_type}",
                        value: value,
                        placeholder: "Enter your Nucleus API token...",
                        on_input: move |e: FormEvent| on_change.call(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: if show_token() { "Hide token" } else { "Show token" },
                        onclick: move |_| show_token.toggle(),
                        if show_token() {
                            Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                        } else {
                            Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                        }
                    }
                }
                p { class: "token-hint",
                    "Your API token will be stored locally in your browser for convenience."
                }
            }
        }
    }
}
