pub mod confirmation_modal;
pub mod error_boundary;
pub mod error_fallback;
pub mod navbar;

pub use confirmation_modal::*;
pub use error_boundary::*;
pub use error_fallback::*;
pub use navbar::*;
