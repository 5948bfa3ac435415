use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use prim::{use_toast, ToastOptions, Toasts};

/// Hosts the toast stack. Wrap the router in it once.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
