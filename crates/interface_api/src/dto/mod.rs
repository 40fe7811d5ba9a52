//! Request/Response data transfer objects

pub mod auth;
pub mod claims;
