//! handlers/admin_auth.rs
//! Validación de la contraseña del panel de administración.

use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::campaign_config::CampaignConfig;

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Devuelve la respuesta 401 lista para retornar si la contraseña no coincide.
pub fn authorize(req: &HttpRequest, config: &CampaignConfig) -> Result<(), HttpResponse> {
    let candidate = req
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if config.check_admin_password(candidate) {
        Ok(())
    } else {
        log::warn!(
            "Acceso rechazado al panel desde {:?}",
            req.peer_addr().map(|a| a.ip())
        );
        Err(HttpResponse::Unauthorized().json(json!({
            "success": false,
            "error": "Invalid admin password"
        })))
    }
}
