//! services/http_email_service.rs
//! Envío a través de una API HTTP de envío (`POST {name, email}`),
//! por ejemplo el endpoint /api/send-email de este mismo servicio.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    config::campaign_config::SendApiSettings,
    models::email_model::{SendEmailRequest, SendEmailResponse, SendOutcome},
    services::email_service::EmailSender,
};

#[derive(Clone)]
pub struct HttpEmailSender {
    http_client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpEmailSender {
    pub fn new(settings: &SendApiSettings) -> Result<Self> {
        if settings.url.is_empty() {
            return Err(anyhow!("No se definió OUTREACH_SEND_API_URL"));
        }
        Ok(Self {
            http_client: Client::new(),
            url: settings.url.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, name: &str, email: &str) -> Result<SendOutcome> {
        let payload = SendEmailRequest {
            name: name.to_string(),
            email: email.to_string(),
        };

        let mut request = self.http_client.post(&self.url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.header("x-admin-password", key);
        }

        let resp = request
            .send()
            .await
            .context("Fallo al hacer POST a la API de envío")?;

        let status = resp.status();
        let body_txt = resp
            .text()
            .await
            .context("Fallo al leer la respuesta de la API de envío")?;
        log::debug!("(http_send) {} -> status={}", email, status);

        outcome_from_reply(status, &body_txt)
    }
}

/// Traduce la respuesta de la API a un resultado de envío.
/// Una respuesta no exitosa o un JSON inválido son fallos.
pub fn outcome_from_reply(status: StatusCode, body: &str) -> Result<SendOutcome> {
    let parsed = serde_json::from_str::<SendEmailResponse>(body);

    if !status.is_success() {
        let error = match parsed {
            Ok(SendEmailResponse {
                error: Some(error), ..
            }) if !error.is_empty() => error,
            _ if !body.trim().is_empty() => format!("HTTP {}: {}", status.as_u16(), body.trim()),
            _ => format!("HTTP {}", status.as_u16()),
        };
        return Ok(SendOutcome::Failed { error });
    }

    let reply = parsed.map_err(|e| anyhow!("Malformed send API response: {}", e))?;
    Ok(SendOutcome::from(reply))
}
