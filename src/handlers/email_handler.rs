//! handlers/email_handler.rs
//! Envío unitario del correo de prospección.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    config::campaign_config::CampaignConfig,
    handlers::admin_auth::authorize,
    models::email_model::{SendEmailRequest, SendEmailResponse, SendOutcome},
    services::campaign_service::CampaignService,
};

/// POST /api/send-email
/// Responde `{ ok: true, id? }` o `{ ok: false, error }`.
pub async fn send_email_endpoint(
    req: HttpRequest,
    config: web::Data<CampaignConfig>,
    campaign_service: web::Data<CampaignService>,
    body: web::Json<SendEmailRequest>,
) -> HttpResponse {
    if let Err(resp) = authorize(&req, &config) {
        return resp;
    }

    let req_data = body.into_inner();
    if req_data.name.trim().is_empty() || req_data.email.trim().is_empty() {
        return HttpResponse::BadRequest().json(SendEmailResponse::from(SendOutcome::failed(
            "name and email are required",
        )));
    }

    let outcome = campaign_service
        .send_single(&req_data.name, &req_data.email)
        .await;

    if let SendOutcome::Failed { error } = &outcome {
        log::error!("Email send error ({}): {}", req_data.email, error);
    }

    let sent = outcome.is_sent();
    let reply = SendEmailResponse::from(outcome);
    if sent {
        HttpResponse::Ok().json(reply)
    } else {
        HttpResponse::BadGateway().json(reply)
    }
}
