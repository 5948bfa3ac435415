// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod skeleton;

// Primitive wrappers
pub mod checkbox;
pub mod dialog;
pub mod label;
pub mod tabs;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use skeleton::*;
pub use tabs::*;
pub use toast::*;
