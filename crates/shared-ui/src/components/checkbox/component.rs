use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "checkbox", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox { ..props }
    }
}

/// Check mark shown while the parent checkbox is checked. Renders a tick
/// when no children are given.
#[component]
pub fn CheckboxIndicator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox-indicator", None, false));

    let mark = match children {
        Ok(node) => Ok(node),
        Err(_) => rsx! {
            svg {
                class: "checkbox-mark",
                xmlns: "http://www.w3.org/2000/svg",
                width: "12",
                height: "12",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                polyline { points: "20 6 9 17 4 12" }
            }
        },
    };

    rsx! {
        prim::CheckboxIndicator { attributes: attrs, {mark} }
    }
}
