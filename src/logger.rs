//! logger.rs
//! Configuración del logger usando env_logger.

/// Inicializa el logger. `RUST_LOG` tiene prioridad sobre `default_level`.
pub fn init_logger(default_level: &str) {
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    // try_init: en tests puede haberse inicializado antes
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_env))
        .format_timestamp_secs()
        .try_init();
}
