//! config/mod.rs
//! Configuración global de la aplicación (variables de entorno / .env).

pub mod campaign_config;
