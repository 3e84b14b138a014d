//! Notifier Lambda - reacts to customer-record updates and sends the
//! activation email when a customer's status transitions to "Ativo".

pub mod handler;
pub mod template;

pub use handler::handler;
