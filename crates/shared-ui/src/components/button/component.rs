use dioxus::prelude::*;

/// Colour treatment of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Themed `<button>`. Inside a form it submits unless `onclick` handles it.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "button", None, false),
            Attribute::new("data-variant", props.variant.as_str(), None, false),
        ],
        props.attributes,
    ]);
    let onclick = props.onclick;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
