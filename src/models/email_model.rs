//! models/email_model.rs
//! Contrato del colaborador que envía correos y el cuerpo del endpoint de envío unitario.

use serde::{Deserialize, Serialize};

/// Resultado de un envío. Un `Err` del colaborador se trata igual que `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent { id: Option<String> },
    Failed { error: String },
}

impl SendOutcome {
    pub fn sent() -> Self {
        SendOutcome::Sent { id: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        SendOutcome::Failed {
            error: error.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }
}

/// Body de POST /api/send-email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub name: String,
    pub email: String,
}

/// Respuesta en el formato `{ ok: true, id? } | { ok: false, error }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SendOutcome> for SendEmailResponse {
    fn from(outcome: SendOutcome) -> Self {
        match outcome {
            SendOutcome::Sent { id } => SendEmailResponse {
                ok: true,
                id,
                error: None,
            },
            SendOutcome::Failed { error } => SendEmailResponse {
                ok: false,
                id: None,
                error: Some(error),
            },
        }
    }
}

impl From<SendEmailResponse> for SendOutcome {
    fn from(resp: SendEmailResponse) -> Self {
        if resp.ok {
            SendOutcome::Sent { id: resp.id }
        } else {
            SendOutcome::Failed {
                error: resp.error.unwrap_or_default(),
            }
        }
    }
}

/// Correo de prospección ya renderizado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}
