//! services/campaign_service.rs
//! Estado en memoria del panel de campaña: lista cargada, corrida activa
//! y su última instantánea para la vista en vivo.

use std::sync::Arc;

use chrono::Utc;

use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::{
    models::{campaign_model::CampaignRun, email_model::SendOutcome, recipient_model::RecipientRecord},
    services::{
        contact_parser::{ContactParser, ParseError},
        dispatch_service::{CancelFlag, DispatchService},
    },
};

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("A campaign run is already in progress")]
    RunInProgress,

    #[error("No contacts loaded")]
    NoContacts,
}

/// Corrida lanzada en segundo plano.
pub struct RunHandle {
    pub run_id: String,
    pub join: JoinHandle<CampaignRun>,
}

#[derive(Default)]
struct PanelState {
    contacts: Vec<RecipientRecord>,
    progress: Option<watch::Receiver<CampaignRun>>,
    cancel: Option<CancelFlag>,
}

impl PanelState {
    fn run_in_progress(&self) -> bool {
        self.progress
            .as_ref()
            .is_some_and(|rx| !rx.borrow().is_complete())
    }

    /// Si la tarea de envío terminó sin cerrar la corrida (panic o abort),
    /// el canal queda cerrado: se marca la corrida como cancelada y terminada.
    fn settle(&mut self) {
        let Some(rx) = &self.progress else {
            return;
        };
        if rx.has_changed().is_ok() || rx.borrow().is_complete() {
            return;
        }

        let mut run = rx.borrow().clone();
        log::error!(
            "(campaign) La tarea de la corrida {} terminó sin completarse; se marca cancelada",
            run.id
        );
        run.cancelled = true;
        run.finished_at = Some(Utc::now());

        // el emisor se descarta: el receptor queda cerrado con la corrida terminada
        let (_tx, rx) = watch::channel(run);
        self.progress = Some(rx);
        self.cancel = None;
    }
}

#[derive(Clone)]
pub struct CampaignService {
    dispatcher: DispatchService,
    parser: ContactParser,
    state: Arc<Mutex<PanelState>>,
}

impl CampaignService {
    pub fn new(dispatcher: DispatchService) -> Self {
        Self {
            dispatcher,
            parser: ContactParser::new(),
            state: Arc::new(Mutex::new(PanelState::default())),
        }
    }

    /// Reemplaza la lista pendiente con el contenido subido.
    pub async fn load_contacts(&self, content: &[u8]) -> Result<Vec<RecipientRecord>, CampaignError> {
        let records = self.parser.parse_bytes(content)?;

        let mut state = self.state.lock().await;
        state.settle();
        if state.run_in_progress() {
            return Err(CampaignError::RunInProgress);
        }
        log::info!("(load_contacts) {} destinatarios cargados", records.len());
        state.contacts = records.clone();
        Ok(records)
    }

    pub async fn contacts(&self) -> Vec<RecipientRecord> {
        self.state.lock().await.contacts.clone()
    }

    /// Lanza una corrida nueva sobre la lista cargada. Sólo una a la vez.
    pub async fn start_run(&self) -> Result<RunHandle, CampaignError> {
        let mut state = self.state.lock().await;
        state.settle();
        if state.run_in_progress() {
            return Err(CampaignError::RunInProgress);
        }
        if state.contacts.is_empty() {
            return Err(CampaignError::NoContacts);
        }

        let mut run = CampaignRun::new(state.contacts.clone());
        let run_id = run.id.clone();
        let (tx, rx) = watch::channel(run.clone());
        let cancel = CancelFlag::new();

        state.progress = Some(rx);
        state.cancel = Some(cancel.clone());
        drop(state);

        let dispatcher = self.dispatcher.clone();
        let join = tokio::spawn(async move {
            dispatcher
                .run_with(&mut run, Some(&cancel), |snapshot| {
                    tx.send_replace(snapshot.clone());
                })
                .await;
            run
        });

        Ok(RunHandle { run_id, join })
    }

    /// Última instantánea de la corrida actual o de la más reciente.
    pub async fn snapshot(&self) -> Option<CampaignRun> {
        let mut state = self.state.lock().await;
        state.settle();
        state.progress.as_ref().map(|rx| rx.borrow().clone())
    }

    /// Devuelve `false` si no hay corrida activa.
    pub async fn cancel(&self) -> bool {
        let mut state = self.state.lock().await;
        state.settle();
        if !state.run_in_progress() {
            return false;
        }
        match &state.cancel {
            Some(flag) => {
                flag.cancel();
                true
            }
            None => false,
        }
    }

    pub async fn send_single(&self, name: &str, email: &str) -> SendOutcome {
        self.dispatcher.send_one(name.trim(), email.trim()).await
    }
}
