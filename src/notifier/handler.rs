//! Notifier Lambda handler - evaluates the activation guard and sends the
//! notification email.
//!
//! This handler is a pure side-effect sink: every outcome, including
//! delivery failure, terminates in a log line and a normal completion. The
//! triggering platform has no way to route a failure back to a human here,
//! so nothing is ever re-raised.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::template::activation_email;
use crate::core::config::AppConfig;
use crate::core::models::{ActivationEvent, CustomerRecord};
use crate::sendgrid::{MailSender, SendGridClient};

pub use self::function_handler as handler;

/// Status value that triggers the notification.
pub const ACTIVE_STATUS: &str = "Ativo";

/// Terminal outcome of one notifier invocation. Returned for test
/// observability; the platform only ever sees a normal completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The event carried no before/after snapshot pair.
    MissingData,
    /// The status did not transition to "Ativo".
    NotActivated,
    /// Exactly one email was handed to the delivery backend.
    Sent,
    /// The delivery backend failed; the failure was logged and swallowed.
    SendFailed,
}

/// Lambda handler for the notifier entrypoint.
///
/// # Errors
///
/// Never returns `Err`: a missing API key, a malformed event, and a failed
/// delivery are all logged and absorbed.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    let config = AppConfig::from_env();

    let Some(api_key) = config.sendgrid_key() else {
        error!("Environment variable 'SENDGRID_KEY' not configured. Aborting.");
        return Ok(());
    };

    let activation: ActivationEvent = match serde_json::from_value(event.payload) {
        Ok(activation) => activation,
        Err(e) => {
            info!("Event payload is not a record update, exiting: {}", e);
            return Ok(());
        }
    };

    let mailer = SendGridClient::new(api_key.to_string());
    process_activation(&mailer, &activation).await;

    Ok(())
}

/// Returns `true` iff the status changed and the new status is "Ativo".
/// Re-activation without a change (Ativo -> Ativo) does not fire.
#[must_use]
pub fn should_notify(before: &CustomerRecord, after: &CustomerRecord) -> bool {
    before.status_cliente != after.status_cliente
        && after.status_cliente.as_deref() == Some(ACTIVE_STATUS)
}

/// Evaluates the guard and, when satisfied, sends exactly one notification
/// email. Logs every branch; delivery failures are logged (including the
/// provider diagnostic body when present) and swallowed.
pub async fn process_activation<M: MailSender>(
    mailer: &M,
    event: &ActivationEvent,
) -> NotifyOutcome {
    let Some(change) = &event.data else {
        info!(
            cliente_id = %event.cliente_id,
            "Event without data, exiting the function."
        );
        return NotifyOutcome::MissingData;
    };

    if !should_notify(&change.before, &change.after) {
        info!(
            cliente_id = %event.cliente_id,
            "Status did not change to 'Ativo'."
        );
        return NotifyOutcome::NotActivated;
    }

    let after = &change.after;
    info!(
        "Customer {} activated. Sending e-mail.",
        after.nome_fantasia.as_deref().unwrap_or("<sem nome>")
    );

    let message = activation_email(after);

    match mailer.send(&message).await {
        Ok(()) => {
            info!(cliente_id = %event.cliente_id, "Activation e-mail sent!");
            NotifyOutcome::Sent
        }
        Err(failure) => {
            error!(
                cliente_id = %event.cliente_id,
                "Error sending activation e-mail: {}", failure
            );
            if let Some(body) = &failure.response_body {
                error!("SendGrid error details: {}", body);
            }
            NotifyOutcome::SendFailed
        }
    }
}
