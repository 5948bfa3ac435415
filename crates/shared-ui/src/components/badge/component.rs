use dioxus::prelude::*;

/// Colour treatment of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Small pill for a result type or status.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "badge", None, false),
            Attribute::new("data-variant", variant.as_str(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
    }
}
