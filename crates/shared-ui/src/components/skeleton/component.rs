use dioxus::prelude::*;

/// Pulsing placeholder block. Size it with a class.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "skeleton", None, false),
            Attribute::new("aria-hidden", "true", None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}
