//! models/recipient_model.rs
//! Un destinatario de la campaña (negocio + correo) y su estado dentro de una corrida.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientStatus {
    Pending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientRecord {
    pub name: String,
    pub email: String,
    pub status: RecipientStatus,
}

impl RecipientRecord {
    /// Crea el registro en estado "pending". Los campos se guardan recortados.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let name: String = name.into();
        let email: String = email.into();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            status: RecipientStatus::Pending,
        }
    }

    /// Falta nombre o correo: el secuenciador no lo envía ni lo cuenta.
    pub fn is_incomplete(&self) -> bool {
        self.name.is_empty() || self.email.is_empty()
    }
}
