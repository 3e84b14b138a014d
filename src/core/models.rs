use serde::{Deserialize, Serialize};

/// A customer document snapshot as stored in the document store.
///
/// Every field is optional: records written by older app versions may be
/// missing any of them, and the notifier must render a placeholder rather
/// than fail when a field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "statusCliente")]
    pub status_cliente: Option<String>,
    #[serde(rename = "nomeFantasia")]
    pub nome_fantasia: Option<String>,
    pub codigo: Option<String>,
    #[serde(rename = "cnpjCpf")]
    pub cnpj_cpf: Option<String>,
    #[serde(rename = "nomeContato")]
    pub nome_contato: Option<String>,
    #[serde(rename = "emailContato")]
    pub email_contato: Option<String>,
    #[serde(rename = "telefoneContato")]
    pub telefone_contato: Option<String>,
}

/// The before/after snapshot pair carried by a record update event.
/// Both snapshots refer to the same logical record.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordChange {
    pub before: CustomerRecord,
    pub after: CustomerRecord,
}

/// An update event delivered to the notifier Lambda.
///
/// `data` is absent on malformed or empty change events; the handler treats
/// that as a benign no-op. Delivery is at-least-once: a duplicate event that
/// still satisfies the activation guard sends a duplicate email.
#[derive(Debug, Deserialize)]
pub struct ActivationEvent {
    #[serde(rename = "clienteId", default)]
    pub cliente_id: String,
    #[serde(default)]
    pub data: Option<RecordChange>,
}

/// A fully rendered outbound email, ready to hand to the delivery backend.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub html: String,
}
