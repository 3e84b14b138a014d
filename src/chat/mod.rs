//! Chat Lambda - synchronous completion proxy.

pub mod handler;
pub mod helpers;

pub use handler::handler;
