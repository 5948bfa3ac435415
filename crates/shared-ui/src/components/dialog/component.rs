use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal root. Controlled through `open` and `on_open_change`.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-backdrop", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    props.class.get_or_insert_with(|| "dialog-panel".to_string());

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-subtitle", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}
