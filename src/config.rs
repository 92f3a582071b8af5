use anyhow::{Context, Result, bail};
use std::env;

/// Run configuration, resolved once from the environment and passed into the
/// pipeline. The chosen numbers stay strings end to end; the draw results
/// compare as strings too.
#[derive(Debug, Clone)]
pub struct Config {
    pub primary_numbers: Vec<String>,
    pub secondary_numbers: Vec<String>,
    pub stake: i64,
    pub ledger_key: String,
    pub database_url: String,
    pub discord_webhook_url: Option<String>,
    pub discord_group_id: Option<String>,
}

fn split_numbers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

pub fn load() -> Result<Config> {
    let primary_numbers = split_numbers(
        &env::var("EUROJACKPOT_PRIMARY_NUMBERS")
            .context("EUROJACKPOT_PRIMARY_NUMBERS is not set")?,
    );
    let secondary_numbers = split_numbers(
        &env::var("EUROJACKPOT_SECONDARY_NUMBERS")
            .context("EUROJACKPOT_SECONDARY_NUMBERS is not set")?,
    );
    if primary_numbers.is_empty() || secondary_numbers.is_empty() {
        bail!("no Eurojackpot numbers configured");
    }

    let stake = match env::var("STAKE_MINOR_UNITS") {
        Ok(raw) => raw
            .parse::<i64>()
            .with_context(|| format!("invalid STAKE_MINOR_UNITS: {raw}"))?,
        Err(_) => 200,
    };

    let ledger_key =
        env::var("LEDGER_KEY").unwrap_or_else(|_| "eurojackpot-investment".to_string());
    let database_url = env::var("LEDGER_DB_PATH").unwrap_or_else(|_| "data/ledger.db".to_string());

    Ok(Config {
        primary_numbers,
        secondary_numbers,
        stake,
        ledger_key,
        database_url,
        discord_webhook_url: env::var("DISCORD_WEBHOOK_URL").ok(),
        discord_group_id: env::var("DISCORD_GROUP_ID").ok(),
    })
}
