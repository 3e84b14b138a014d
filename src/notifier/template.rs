//! Activation email templating.
//!
//! Renders the notification subject and HTML body from the post-update
//! customer snapshot. Every field is substituted independently, with a
//! literal placeholder when the value is absent or blank, so rendering
//! never fails on a sparse record.

use crate::core::models::{CustomerRecord, EmailMessage};

/// Fixed recipient of activation notifications.
pub const NOTIFICATION_RECIPIENT: &str = "jarbascow@gmail.com";

/// Sender identity shown on outgoing notifications.
pub const SENDER_NAME: &str = "MaicoSoft CRM";
pub const SENDER_EMAIL: &str = "nngds4444@gmail.com";

const PLACEHOLDER_MISSING: &str = "Não informado";
const PLACEHOLDER_CODE: &str = "N/A";
const PLACEHOLDER_NAME: &str = "Sem nome";

/// Returns the field value, or `placeholder` when the field is `None`,
/// empty, or whitespace-only.
fn field_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// Builds the full activation notification for an activated customer.
#[must_use]
pub fn activation_email(after: &CustomerRecord) -> EmailMessage {
    let display_name = field_or(&after.nome_fantasia, PLACEHOLDER_NAME);

    let subject = format!("Novo Cliente Ativado: {display_name}");

    let html = format!(
        "<h1>Novo Cliente Ativado no Sistema</h1>\
         <p>O cliente <strong>{display_name}</strong> \
         (Cód: {codigo}) foi ativado.</p>\
         <h2>Dados do Cliente</h2>\
         <ul>\
             <li><strong>Nome Fantasia:</strong> {nome_fantasia}</li>\
             <li><strong>CNPJ/CPF:</strong> {cnpj_cpf}</li>\
         </ul>\
         <h2>Contato Principal</h2>\
         <ul>\
             <li><strong>Nome:</strong> {nome_contato}</li>\
             <li><strong>E-mail:</strong> {email_contato}</li>\
             <li><strong>Telefone:</strong> {telefone_contato}</li>\
         </ul>",
        codigo = field_or(&after.codigo, PLACEHOLDER_CODE),
        nome_fantasia = field_or(&after.nome_fantasia, PLACEHOLDER_MISSING),
        cnpj_cpf = field_or(&after.cnpj_cpf, PLACEHOLDER_MISSING),
        nome_contato = field_or(&after.nome_contato, PLACEHOLDER_MISSING),
        email_contato = field_or(&after.email_contato, PLACEHOLDER_MISSING),
        telefone_contato = field_or(&after.telefone_contato, PLACEHOLDER_MISSING),
    );

    EmailMessage {
        to: NOTIFICATION_RECIPIENT.to_string(),
        from_name: SENDER_NAME.to_string(),
        from_email: SENDER_EMAIL.to_string(),
        subject,
        html,
    }
}
