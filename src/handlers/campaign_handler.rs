//! handlers/campaign_handler.rs
//! Endpoints del panel de campaña: carga de contactos, envío, estado y cancelación.

use actix_web::{web, HttpRequest, HttpResponse};
use bytes::Bytes;
use serde_json::json;

use crate::{
    config::campaign_config::CampaignConfig,
    handlers::admin_auth::authorize,
    models::campaign_model::{CampaignStatusResponse, ContactsLoadedResponse, SendCampaignQuery},
    services::{
        campaign_service::{CampaignError, CampaignService},
        status_reporter::status_line,
    },
};

fn campaign_error_response(e: &CampaignError) -> HttpResponse {
    let body = json!({
        "success": false,
        "error": e.to_string()
    });
    match e {
        CampaignError::RunInProgress => HttpResponse::Conflict().json(body),
        CampaignError::Parse(_) | CampaignError::NoContacts => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

/// POST /api/campaign/contacts
/// Body: texto plano `nombre,correo` por línea.
pub async fn load_contacts_endpoint(
    req: HttpRequest,
    config: web::Data<CampaignConfig>,
    campaign_service: web::Data<CampaignService>,
    body: Bytes,
) -> HttpResponse {
    if let Err(resp) = authorize(&req, &config) {
        return resp;
    }

    match campaign_service.load_contacts(&body).await {
        Ok(records) => {
            let incomplete = records.iter().filter(|r| r.is_incomplete()).count();
            HttpResponse::Ok().json(ContactsLoadedResponse {
                success: true,
                total: records.len(),
                incomplete,
                records,
            })
        }
        Err(e) => {
            log::error!("Error cargando contactos: {}", e);
            campaign_error_response(&e)
        }
    }
}

/// POST /api/campaign/send?async_send=true|false
pub async fn send_campaign_endpoint(
    req: HttpRequest,
    config: web::Data<CampaignConfig>,
    campaign_service: web::Data<CampaignService>,
    query: web::Query<SendCampaignQuery>,
) -> HttpResponse {
    if let Err(resp) = authorize(&req, &config) {
        return resp;
    }

    let handle = match campaign_service.start_run().await {
        Ok(handle) => handle,
        Err(e) => return campaign_error_response(&e),
    };

    if query.async_send {
        return HttpResponse::Accepted().json(json!({
            "success": true,
            "run_id": handle.run_id,
            "message": "Campaign run started"
        }));
    }

    match handle.join.await {
        Ok(run) => {
            let line = status_line(&run);
            HttpResponse::Ok().json(CampaignStatusResponse::from_run(&run, line))
        }
        Err(e) => {
            log::error!("La corrida {} terminó con error: {}", handle.run_id, e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "run_id": handle.run_id,
                "error": format!("Campaign task failed: {}", e)
            }))
        }
    }
}

/// GET /api/campaign/status
pub async fn campaign_status_endpoint(
    req: HttpRequest,
    config: web::Data<CampaignConfig>,
    campaign_service: web::Data<CampaignService>,
) -> HttpResponse {
    if let Err(resp) = authorize(&req, &config) {
        return resp;
    }

    match campaign_service.snapshot().await {
        Some(run) => {
            let line = status_line(&run);
            HttpResponse::Ok().json(CampaignStatusResponse::from_run(&run, line))
        }
        None => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "No campaign run yet"
        })),
    }
}

/// POST /api/campaign/cancel
pub async fn cancel_campaign_endpoint(
    req: HttpRequest,
    config: web::Data<CampaignConfig>,
    campaign_service: web::Data<CampaignService>,
) -> HttpResponse {
    if let Err(resp) = authorize(&req, &config) {
        return resp;
    }

    if campaign_service.cancel().await {
        HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Cancellation requested"
        }))
    } else {
        HttpResponse::Conflict().json(json!({
            "success": false,
            "error": "No campaign run in progress"
        }))
    }
}
