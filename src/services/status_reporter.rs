//! services/status_reporter.rs
//! Proyección de una corrida a la línea de estado que ven el panel y la consola.

use crate::models::campaign_model::CampaignRun;
use crate::services::result_aggregator::CampaignSummary;

pub fn status_line(run: &CampaignRun) -> String {
    summary_line(&run.summary())
}

pub fn summary_line(summary: &CampaignSummary) -> String {
    let mut line = format!("Sent {} emails successfully.", summary.sent);
    if summary.failed > 0 {
        line.push_str(&format!(" {} failed.", summary.failed));
        if !summary.errors.is_empty() {
            line.push_str(&format!(" Error: {}", summary.errors.join(", ")));
        }
    }
    line
}
