//! app.rs
use crate::handlers::{campaign_handler, email_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route(
                "/send-email",
                web::post().to(email_handler::send_email_endpoint),
            )
            .service(
                web::scope("/campaign")
                    .route(
                        "/contacts",
                        web::post().to(campaign_handler::load_contacts_endpoint),
                    )
                    .route(
                        "/send",
                        web::post().to(campaign_handler::send_campaign_endpoint),
                    )
                    .route(
                        "/status",
                        web::get().to(campaign_handler::campaign_status_endpoint),
                    )
                    .route(
                        "/cancel",
                        web::post().to(campaign_handler::cancel_campaign_endpoint),
                    ),
            ),
    );
}
