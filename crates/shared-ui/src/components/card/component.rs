use dioxus::prelude::*;

fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered surface grouping related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card", attributes);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Heading of a card, rendered as `<h3>`.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-title", attributes);
    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-description", attributes);
    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("card-content", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}
