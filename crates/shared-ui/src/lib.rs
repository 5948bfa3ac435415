//! Styled wrappers over `dioxus-primitives` used by the search front end.

pub mod components;
pub mod theme;

pub use components::*;
