//! models/campaign_model.rs
//! Estado de una corrida de campaña y las estructuras que expone el panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::recipient_model::{RecipientRecord, RecipientStatus};
use crate::services::result_aggregator::{CampaignSummary, ResultAggregator};

/// Una pasada completa del secuenciador sobre la lista de destinatarios.
/// Se crea nueva en cada envío y no se persiste.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignRun {
    pub id: String,
    pub records: Vec<RecipientRecord>,
    pub results: ResultAggregator,
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CampaignRun {
    pub fn new(records: Vec<RecipientRecord>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            records,
            results: ResultAggregator::default(),
            cancelled: false,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn success_count(&self) -> u64 {
        self.results.success_count()
    }

    pub fn failure_count(&self) -> u64 {
        self.results.failure_count()
    }

    pub fn error_messages(&self) -> &[String] {
        self.results.error_messages()
    }

    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Registros que nunca salieron de "pending" (incompletos o cancelados).
    pub fn pending_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == RecipientStatus::Pending)
            .count()
    }

    pub fn summary(&self) -> CampaignSummary {
        self.results.summary()
    }
}

/// Query de POST /api/campaign/send
#[derive(Debug, Clone, Deserialize)]
pub struct SendCampaignQuery {
    #[serde(default)]
    pub async_send: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactsLoadedResponse {
    pub success: bool,
    pub total: usize,
    pub incomplete: usize,
    pub records: Vec<RecipientRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignStatusResponse {
    pub run_id: String,
    pub in_progress: bool,
    pub cancelled: bool,
    pub records: Vec<RecipientRecord>,
    pub summary: CampaignSummary,
    pub status_line: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CampaignStatusResponse {
    pub fn from_run(run: &CampaignRun, status_line: String) -> Self {
        Self {
            run_id: run.id.clone(),
            in_progress: !run.is_complete(),
            cancelled: run.cancelled,
            records: run.records.clone(),
            summary: run.summary(),
            status_line,
            started_at: run.started_at,
            finished_at: run.finished_at,
        }
    }
}
