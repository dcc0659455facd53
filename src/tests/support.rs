//! tests/support.rs
//! Colaboradores de prueba: un sender con respuestas guionadas que registra
//! el orden de llamadas y un pacer que cuenta pausas.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::email_model::SendOutcome;
use crate::services::dispatch_service::{CancelFlag, DispatchService};
use crate::services::email_service::EmailSender;
use crate::services::send_pacer::{NoDelay, SendPacer};

#[derive(Debug, Clone)]
pub enum StubReply {
    Fail(&'static str),
    Error(&'static str),
    Hang,
    Panic,
}

#[derive(Default)]
pub struct StubSender {
    calls: Mutex<Vec<(String, String)>>,
    replies: HashMap<String, StubReply>,
    cancel_on: Option<(String, CancelFlag)>,
}

impl StubSender {
    /// Todos los envíos salen bien salvo los guionados.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, email: &str, reply: StubReply) -> Self {
        self.replies.insert(email.to_string(), reply);
        self
    }

    /// Levanta la bandera de cancelación mientras procesa `email`.
    pub fn cancel_on(mut self, email: &str, flag: CancelFlag) -> Self {
        self.cancel_on = Some((email.to_string(), flag));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, email)| email.clone())
            .collect()
    }
}

#[async_trait]
impl EmailSender for StubSender {
    async fn send(&self, name: &str, email: &str) -> Result<SendOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), email.to_string()));

        if let Some((target, flag)) = &self.cancel_on {
            if target == email {
                flag.cancel();
            }
        }

        match self.replies.get(email).cloned() {
            None => Ok(SendOutcome::Sent {
                id: Some(format!("id-{}", email)),
            }),
            Some(StubReply::Fail(error)) => Ok(SendOutcome::failed(error)),
            Some(StubReply::Error(error)) => Err(anyhow!(error)),
            Some(StubReply::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Some(StubReply::Panic) => panic!("sender exploded on {}", email),
        }
    }
}

#[derive(Default)]
pub struct CountingPacer {
    pauses: AtomicUsize,
}

impl CountingPacer {
    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SendPacer for CountingPacer {
    async fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn dispatcher_with(sender: Arc<StubSender>) -> DispatchService {
    DispatchService::new(sender, Arc::new(NoDelay))
}
