//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod campaign_service;
pub mod contact_parser;
pub mod dispatch_service;
pub mod email_service;
pub mod http_email_service;
pub mod result_aggregator;
pub mod send_pacer;
pub mod status_reporter;
pub mod template_service;
