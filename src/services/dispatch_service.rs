//! services/dispatch_service.rs
//! Secuenciador de envíos: recorre los destinatarios en orden, llama al
//! colaborador una vez por registro y actualiza estado y conteos.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::{
    models::{
        campaign_model::CampaignRun, email_model::SendOutcome,
        recipient_model::RecipientStatus,
    },
    services::{email_service::EmailSender, send_pacer::SendPacer},
};

/// Bandera compartida para detener una corrida entre registros.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
pub struct DispatchService {
    sender: Arc<dyn EmailSender>,
    pacer: Arc<dyn SendPacer>,
    send_timeout: Option<Duration>,
}

impl DispatchService {
    pub fn new(sender: Arc<dyn EmailSender>, pacer: Arc<dyn SendPacer>) -> Self {
        Self {
            sender,
            pacer,
            send_timeout: None,
        }
    }

    pub fn with_send_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.send_timeout = timeout;
        self
    }

    /// Ejecuta la corrida completa sin observador ni cancelación.
    pub async fn run(&self, run: &mut CampaignRun) {
        self.run_with(run, None, |_| {}).await
    }

    /// Procesa cada registro exactamente una vez, en orden de entrada.
    ///
    /// - Registros sin nombre o correo se saltan: quedan "pending" y no cuentan.
    /// - Cada envío se intenta una sola vez; un error o timeout marca "failed".
    /// - `on_progress` recibe la corrida después de cada cambio de estado.
    /// - Si `cancel` se activa, los registros restantes quedan "pending".
    pub async fn run_with<F>(
        &self,
        run: &mut CampaignRun,
        cancel: Option<&CancelFlag>,
        mut on_progress: F,
    ) where
        F: FnMut(&CampaignRun),
    {
        log::info!(
            "(dispatch) Iniciando corrida {} con {} destinatarios",
            run.id,
            run.records.len()
        );

        let total = run.records.len();
        for idx in 0..total {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                log::warn!(
                    "(dispatch) Corrida {} cancelada antes del registro {}",
                    run.id,
                    idx + 1
                );
                run.cancelled = true;
                break;
            }

            let record = &run.records[idx];
            if record.is_incomplete() {
                log::warn!(
                    "(dispatch) Registro {} sin nombre o correo, se omite (name='{}', email='{}')",
                    idx + 1,
                    record.name,
                    record.email
                );
                continue;
            }

            let outcome = self.send_one(&record.name, &record.email).await;

            let record = &mut run.records[idx];
            match outcome {
                SendOutcome::Sent { id } => {
                    log::info!(
                        "(dispatch) [{}/{}] Enviado a {} <{}> id={:?}",
                        idx + 1,
                        total,
                        record.name,
                        record.email,
                        id
                    );
                    record.status = RecipientStatus::Sent;
                    run.results.record_success();
                }
                SendOutcome::Failed { error } => {
                    log::warn!(
                        "(dispatch) [{}/{}] Falló envío a {} <{}>: {}",
                        idx + 1,
                        total,
                        record.name,
                        record.email,
                        error
                    );
                    record.status = RecipientStatus::Failed;
                    run.results.record_failure(&error);
                }
            }

            on_progress(run);

            if idx + 1 < total {
                self.pacer.pause().await;
            }
        }

        run.finished_at = Some(Utc::now());
        on_progress(run);

        log::info!(
            "(dispatch) Corrida {} finalizada: enviados={}, fallidos={}, errores distintos={}",
            run.id,
            run.success_count(),
            run.failure_count(),
            run.error_messages().len()
        );
    }

    /// Un único intento; nunca reintenta.
    pub async fn send_one(&self, name: &str, email: &str) -> SendOutcome {
        let attempt = self.sender.send(name, email);

        let result = match self.send_timeout {
            Some(limit) => match tokio::time::timeout(limit, attempt).await {
                Ok(result) => result,
                Err(_) => {
                    return SendOutcome::failed(format!("send timed out after {:?}", limit))
                }
            },
            None => attempt.await,
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => SendOutcome::Failed {
                error: format!("{e:#}"),
            },
        }
    }
}
