pub mod auth;

pub use auth::{admin_gate, AuthAdmin};
