//! services/send_pacer.rs
//! Política de ritmo entre envíos consecutivos.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait SendPacer: Send + Sync {
    /// Se llama después de cada registro procesado cuando queda otro por delante.
    async fn pause(&self);
}

/// Pausa fija entre envíos; no se adapta ni hace backoff.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval(pub Duration);

impl FixedInterval {
    pub fn from_millis(ms: u64) -> Self {
        FixedInterval(Duration::from_millis(ms))
    }
}

#[async_trait]
impl SendPacer for FixedInterval {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl SendPacer for NoDelay {
    async fn pause(&self) {}
}
