use dioxus::prelude::*;

/// Single-line text field with an optional caption above it.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "input", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                span { class: "input-caption", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value,
                placeholder,
                disabled,
                autocomplete: "off",
                spellcheck: "false",
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_type_and_value_render() {
        fn app() -> Element {
            rsx! { Input { input_type: "password", value: "secret", placeholder: "Token" } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"type="password""#), "{html}");
        assert!(html.contains(r#"placeholder="Token""#));
        assert!(!html.contains("input-caption"));
    }
}
