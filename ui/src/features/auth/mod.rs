pub mod controller;
pub mod flow;
pub mod form_validation;
pub mod types;

pub use controller::*;
pub use flow::*;
pub use form_validation::*;
pub use types::*;
