use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        main { class: "not-found",
            p { class: "not-found-code", "404" }
            h1 { "Nothing to search here" }
            p { class: "not-found-path",
                code { "{path}" }
                " is not a page of Insight Search."
            }
            Link { to: Route::SearchPage {}, class: "not-found-link", "Back to Search" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;
    use std::str::FromStr;

    #[test]
    fn unknown_path_parses_to_not_found() {
        assert_eq!(
            Route::from_str("/reports/2025").unwrap(),
            Route::NotFound {
                route: vec!["reports".to_string(), "2025".to_string()]
            }
        );
        assert_eq!(Route::from_str("/").unwrap(), Route::SearchPage {});
        assert_eq!(Route::SearchPage {}.to_string(), "/");
    }

    #[test]
    fn renders_404_with_link_home() {
        fn app() -> Element {
            use_context_provider(|| {
                Rc::new(MemoryHistory::with_initial_path("/x")) as Rc<dyn History>
            });
            rsx! { Router::<Route> {} }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("404"), "{html}");
        assert!(html.contains("<code>/x</code>"));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("Back to Search"));
    }
}
