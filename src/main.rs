use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;

use outreach_service::app;
use outreach_service::config::campaign_config::CampaignConfig;
use outreach_service::logger::init_logger;
use outreach_service::services::campaign_service::CampaignService;
use outreach_service::services::dispatch_service::DispatchService;
use outreach_service::services::email_service::build_sender;
use outreach_service::services::send_pacer::FixedInterval;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger("info");

    let config = CampaignConfig::from_env().context("Configuración inválida")?;
    if config.admin_password.is_empty() {
        log::warn!("OUTREACH_ADMIN_PASSWORD no definido: el panel rechazará todas las peticiones");
    }

    let sender = build_sender(&config).context("No se pudo inicializar el envío de correos")?;
    let dispatcher = DispatchService::new(sender, Arc::new(FixedInterval(config.send_delay())))
        .with_send_timeout(config.send_timeout());
    let campaign_service = CampaignService::new(dispatcher);

    let bind = (config.bind_addr.clone(), config.port);
    log::info!(
        "Levantando servidor en {}:{} (pausa entre envíos={}ms)",
        bind.0,
        bind.1,
        config.send_delay_ms
    );

    // Cada worker recibe un clon de CampaignService; el estado del panel es compartido
    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(5 * 1024 * 1024))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(campaign_service.clone()))
            .configure(app::init_app)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
