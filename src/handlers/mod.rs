//! handlers/mod.rs
pub mod admin_auth;
pub mod campaign_handler;
pub mod email_handler;
