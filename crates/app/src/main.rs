use dioxus::prelude::*;

mod components;
mod controller;
mod format_helpers;
mod routes;
mod token_store;

use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

/// Largest request body accepted by the server. Search calls carry a keyword
/// and a token, nothing more.
#[cfg(feature = "server")]
const MAX_BODY_BYTES: usize = 64 * 1024;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        server::health::record_start_time();

        let router = dioxus::server::router(App)
            .merge(server::health::health_router())
            .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "RegTech Insight Search" }
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
