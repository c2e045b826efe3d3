//! Lambda handler and response builders

pub mod handler;
pub mod helpers;

pub use handler::handler;
