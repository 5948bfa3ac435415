pub mod not_found;
pub mod search;

use dioxus::prelude::*;

use not_found::NotFound;
use search::SearchPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    SearchPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
