pub mod account;
pub mod auth;
pub mod boundary;
pub mod branding;
pub mod navbar;
pub mod recovery;
