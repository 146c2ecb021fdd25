pub mod auth;
pub mod cars;
