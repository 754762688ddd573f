pub mod error;
pub mod fields;
pub mod merge;
pub mod repo;
pub mod service;
pub mod store;
pub mod users;
pub mod validation;
