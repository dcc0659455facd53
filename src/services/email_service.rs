//! services/email_service.rs
//! Colaborador que envía un correo por destinatario: trait común,
//! envío por SMTP (lettre) y envío a consola para pruebas locales.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::campaign_config::{CampaignConfig, SmtpSettings, TransportKind},
    models::email_model::SendOutcome,
    services::{http_email_service::HttpEmailSender, template_service::render_outreach},
};

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Envía el correo de prospección a un destinatario.
    /// Un `Err` cuenta igual que `SendOutcome::Failed`.
    async fn send(&self, name: &str, email: &str) -> Result<SendOutcome>;
}

/// Construye el colaborador según el transporte configurado.
pub fn build_sender(cfg: &CampaignConfig) -> Result<Arc<dyn EmailSender>> {
    let sender: Arc<dyn EmailSender> = match cfg.transport {
        TransportKind::Smtp => Arc::new(SmtpEmailSender::new(&cfg.smtp, &cfg.from_name)?),
        TransportKind::Http => Arc::new(HttpEmailSender::new(&cfg.send_api)?),
        TransportKind::Console => Arc::new(ConsoleEmailSender),
    };
    log::info!("Transporte de correo: {:?}", cfg.transport);
    Ok(sender)
}

#[derive(Clone)]
pub struct SmtpEmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn new(smtp: &SmtpSettings, from_name: &str) -> Result<Self> {
        if smtp.host.is_empty() || smtp.user.is_empty() {
            return Err(anyhow!("SMTP_HOST o SMTP_USER no configurados"));
        }

        let from_addr: Address = smtp.user.parse().context("Invalid from address")?;
        let from = Mailbox::new(Some(from_name.to_string()), from_addr);

        let tls_params = TlsParameters::new(smtp.host.clone())?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
            .port(smtp.port)
            .credentials(Credentials::new(smtp.user.clone(), smtp.pass.clone()))
            .tls(Tls::Required(tls_params))
            .build();

        Ok(Self { mailer, from })
    }

    fn build_message(&self, name: &str, email: &str) -> Result<Message> {
        let to_addr: Address = email.parse().context("Invalid recipient address")?;
        let to = Mailbox::new(Some(name.to_string()), to_addr);
        let content = render_outreach(name);

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(content.subject)
            .multipart(MultiPart::alternative_plain_html(content.text, content.html))?;
        Ok(message)
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, name: &str, email: &str) -> Result<SendOutcome> {
        let message = self.build_message(name, email)?;
        let response = self.mailer.send(message).await?;

        Ok(SendOutcome::Sent {
            id: response.first_line().map(str::to_owned),
        })
    }
}

/// No envía nada: deja el correo renderizado en el log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmailSender;

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    async fn send(&self, name: &str, email: &str) -> Result<SendOutcome> {
        let content = render_outreach(name);
        log::info!(
            "(console) To: {} <{}> | Subject: {} | {} chars",
            name,
            email,
            content.subject,
            content.text.len()
        );
        Ok(SendOutcome::sent())
    }
}
