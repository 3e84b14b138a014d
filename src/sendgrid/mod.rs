//! SendGrid integration.
//!
//! Transactional-email delivery behind the [`MailSender`](client::MailSender)
//! trait so the notifier can be tested without a live SendGrid account.

pub mod client;

pub use client::{MailSender, SendFailure, SendGridClient};
