pub mod error;
pub mod form;
pub mod store;
pub mod user;
pub mod validation;
