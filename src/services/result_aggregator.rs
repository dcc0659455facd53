//! services/result_aggregator.rs
//! Conteo de éxitos/fallos y errores distintos a lo largo de una corrida.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultAggregator {
    success_count: u64,
    failure_count: u64,
    error_messages: Vec<String>,
}

/// Resumen final de la corrida.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub sent: u64,
    pub failed: u64,
    pub errors: Vec<String>,
}

impl ResultAggregator {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    /// Cuenta el fallo y guarda el mensaje si no se había visto (comparación exacta).
    /// Un mensaje vacío cuenta como fallo sin texto de error.
    pub fn record_failure(&mut self, error: &str) {
        self.failure_count += 1;
        if !error.is_empty() && !self.error_messages.iter().any(|e| e == error) {
            self.error_messages.push(error.to_string());
        }
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }

    /// Procesados hasta ahora (enviados + fallidos).
    pub fn processed(&self) -> u64 {
        self.success_count + self.failure_count
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn summary(&self) -> CampaignSummary {
        CampaignSummary {
            sent: self.success_count,
            failed: self.failure_count,
            errors: self.error_messages.clone(),
        }
    }
}
