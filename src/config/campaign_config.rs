//! config/campaign_config.rs
//! Configuración de la campaña de correos, con valores por defecto.
//! Se lee de variables de entorno (y de `.env` si existe).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Transporte usado por el colaborador que envía los correos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Smtp,
    Http,
    Console,
}

impl FromStr for TransportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smtp" => Ok(TransportKind::Smtp),
            "http" => Ok(TransportKind::Http),
            "console" => Ok(TransportKind::Console),
            other => Err(anyhow!("Transporte no soportado: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub pass: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendApiSettings {
    pub url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub bind_addr: String,
    pub port: u16,
    #[serde(skip_serializing)]
    pub admin_password: String,
    pub transport: TransportKind,
    pub smtp: SmtpSettings,
    pub send_api: SendApiSettings,
    pub from_name: String,
    /// Pausa entre envíos, la misma para el panel y el script por lotes.
    pub send_delay_ms: u64,
    /// 0 = sin límite
    pub send_timeout_secs: u64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 5022,
            admin_password: String::new(),
            transport: TransportKind::Smtp,
            smtp: SmtpSettings {
                host: String::new(),
                port: 587,
                user: String::new(),
                pass: String::new(),
            },
            send_api: SendApiSettings {
                url: String::new(),
                api_key: None,
            },
            from_name: "Lawn & Move".to_string(),
            send_delay_ms: 1000,
            send_timeout_secs: 30,
        }
    }
}

impl CampaignConfig {
    pub fn from_env() -> Result<Self> {
        let mut cfg = CampaignConfig::default();

        if let Some(v) = var("OUTREACH_BIND_ADDR") {
            cfg.bind_addr = v;
        }
        if let Some(v) = parsed::<u16>("OUTREACH_PORT")? {
            cfg.port = v;
        }
        if let Some(v) = var("OUTREACH_ADMIN_PASSWORD") {
            cfg.admin_password = v;
        }
        if let Some(v) = var("OUTREACH_TRANSPORT") {
            cfg.transport = v.parse().context("OUTREACH_TRANSPORT inválido")?;
        }

        if let Some(v) = var("SMTP_HOST") {
            cfg.smtp.host = v;
        }
        if let Some(v) = parsed::<u16>("SMTP_PORT")? {
            cfg.smtp.port = v;
        }
        if let Some(v) = var("SMTP_USER") {
            cfg.smtp.user = v;
        }
        if let Some(v) = var("SMTP_PASS") {
            cfg.smtp.pass = v;
        }
        if let Some(v) = var("OUTREACH_FROM_NAME") {
            cfg.from_name = v;
        }

        if let Some(v) = var("OUTREACH_SEND_API_URL") {
            cfg.send_api.url = v;
        }
        cfg.send_api.api_key = var("OUTREACH_SEND_API_KEY");

        if let Some(v) = parsed::<u64>("OUTREACH_SEND_DELAY_MS")? {
            cfg.send_delay_ms = v;
        }
        if let Some(v) = parsed::<u64>("OUTREACH_SEND_TIMEOUT_SECS")? {
            cfg.send_timeout_secs = v;
        }

        Ok(cfg)
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn send_timeout(&self) -> Option<Duration> {
        match self.send_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Sin contraseña configurada el panel queda cerrado.
    pub fn check_admin_password(&self, candidate: &str) -> bool {
        !self.admin_password.is_empty() && self.admin_password == candidate
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(v) => v
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Valor inválido para {}: '{}'", key, v)),
        None => Ok(None),
    }
}
