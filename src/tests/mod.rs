//! tests/mod.rs
//! Pruebas unitarias y de endpoints.

mod support;

mod campaign_service_tests;
mod parser_tests;
