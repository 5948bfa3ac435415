pub mod citation;
pub mod config;
pub mod error;
pub mod search;

pub use citation::*;
pub use config::*;
pub use error::*;
pub use search::*;
