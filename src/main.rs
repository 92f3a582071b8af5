use anyhow::Result;
use tracing_subscriber::EnvFilter;

use eurojackpot_lib::ledger::SqliteLedgerStore;
use eurojackpot_lib::sink::{DiscordWebhookSink, MessageSink, StdoutSink};
use eurojackpot_lib::{api, config, pipeline, reports, utils};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = config::load()?;
    let store = SqliteLedgerStore::open(&config.database_url)?;
    let client = reqwest::Client::new();

    let (year, week) = utils::current_iso_week();
    let report = match api::fetch_draws(&client, year, week).await {
        Ok(draws) => pipeline::build_report(&draws, &store, &config)?,
        Err(err) => {
            // Failed fetch gets the same fallback as an empty week; the
            // ledger stays untouched either way.
            tracing::warn!(error = %err, "fetching draw results failed");
            reports::NO_RESULTS_MESSAGE.to_string()
        }
    };

    match &config.discord_webhook_url {
        Some(webhook_url) => {
            let sink = DiscordWebhookSink::new(
                client,
                webhook_url.clone(),
                config.discord_group_id.clone(),
            );
            sink.deliver(&report).await?;
        }
        None => StdoutSink.deliver(&report).await?,
    }

    Ok(())
}
