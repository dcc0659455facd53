//! Backend del panel de campaña de correos y envío por lotes
//! para clientes comerciales (cuidado de jardines / mudanzas).

pub mod app;
pub mod config;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;
