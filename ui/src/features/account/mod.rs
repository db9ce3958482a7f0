pub mod deletion;

pub use deletion::*;
