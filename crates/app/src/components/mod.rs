pub mod hero;
pub mod preview_dialog;
pub mod search_form;
pub mod search_results;
pub mod token_input;

pub use hero::Hero;
pub use preview_dialog::PreviewDialog;
pub use search_form::SearchForm;
pub use search_results::SearchResults;
pub use token_input::TokenInput;
