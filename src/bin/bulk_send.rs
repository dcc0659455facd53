//! Envío por lotes desde la línea de comandos: lee la lista de contactos,
//! envía en orden con pausa fija e imprime la línea de estado final.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;

use outreach_service::config::campaign_config::{CampaignConfig, TransportKind};
use outreach_service::logger::init_logger;
use outreach_service::models::campaign_model::CampaignRun;
use outreach_service::services::contact_parser::ContactParser;
use outreach_service::services::dispatch_service::DispatchService;
use outreach_service::services::email_service::build_sender;
use outreach_service::services::send_pacer::FixedInterval;
use outreach_service::services::status_reporter::status_line;

/// Send the outreach email to every contact in a `name,email` list
#[derive(Parser, Debug)]
#[command(name = "bulk-send", version, about)]
struct Cli {
    /// Path to the contact list (one `name,email` per line)
    contacts: PathBuf,

    /// Pause between consecutive sends, in milliseconds
    #[arg(long, env = "OUTREACH_SEND_DELAY_MS")]
    delay_ms: Option<u64>,

    /// Per-send timeout in seconds (0 = no timeout)
    #[arg(long, env = "OUTREACH_SEND_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Email transport: smtp, http or console
    #[arg(long, env = "OUTREACH_TRANSPORT")]
    transport: Option<TransportKind>,

    /// Treat the first non-blank line as a header row
    #[arg(long)]
    skip_header: bool,

    /// Increase logging verbosity
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    init_logger(match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "warn",
        _ => "info",
    });

    let mut config = CampaignConfig::from_env().context("Configuración inválida")?;
    if let Some(ms) = cli.delay_ms {
        config.send_delay_ms = ms;
    }
    if let Some(secs) = cli.timeout_secs {
        config.send_timeout_secs = secs;
    }
    if let Some(transport) = cli.transport {
        config.transport = transport;
    }

    let records = ContactParser::new()
        .with_header(cli.skip_header)
        .parse_file(&cli.contacts)
        .await
        .with_context(|| format!("No se pudo leer {}", cli.contacts.display()))?;
    log::info!(
        "{} destinatarios leídos de {}",
        records.len(),
        cli.contacts.display()
    );

    let sender = build_sender(&config)?;
    let dispatcher = DispatchService::new(sender, Arc::new(FixedInterval(config.send_delay())))
        .with_send_timeout(config.send_timeout());

    let mut run = CampaignRun::new(records);
    dispatcher.run(&mut run).await;

    let skipped = run.pending_count();
    if skipped > 0 {
        log::warn!("{} registros incompletos no se enviaron", skipped);
    }

    println!("{}", status_line(&run));
    Ok(())
}
