use crate::config::Config;
use crate::error::Error;
use crate::ledger::{LedgerStore, update_ledger};
use crate::reports::{DRAW_SEPARATOR, NO_RESULTS_MESSAGE, render_draw_summary};
use crate::types::Draw;
use crate::winnings::{biggest_prize_tier, count_hits, match_prize};

/// Evaluate one week's draws against the configured numbers and build the
/// report. The ledger is read, updated and written once per draw, in input
/// order. A draw without prize tiers is skipped (logged, others continue);
/// a ledger failure aborts the run so no further draws are charged.
pub fn build_report(
    draws: &[Draw],
    store: &impl LedgerStore,
    config: &Config,
) -> Result<String, Error> {
    if draws.is_empty() {
        tracing::info!("no draws for the requested week");
        return Ok(NO_RESULTS_MESSAGE.to_string());
    }

    let mut lines = Vec::with_capacity(draws.len());
    for draw in draws {
        match process_draw(draw, store, config) {
            Ok(line) => lines.push(line),
            Err(err @ Error::LedgerUnavailable(_)) => return Err(err),
            Err(err) => {
                tracing::warn!(draw = %draw.name, error = %err, "skipping draw");
            }
        }
    }
    Ok(lines.join(DRAW_SEPARATOR))
}

fn process_draw(draw: &Draw, store: &impl LedgerStore, config: &Config) -> Result<String, Error> {
    let (primary_drawn, secondary_drawn) = draw.drawn_numbers();
    let primary_hits = count_hits(primary_drawn, &config.primary_numbers);
    let secondary_hits = count_hits(secondary_drawn, &config.secondary_numbers);

    let winnings = match_prize(&draw.prize_tiers, primary_hits, secondary_hits);
    let biggest_tier = biggest_prize_tier(&draw.prize_tiers, &draw.name)?;

    let previous_balance = store.get_value(&config.ledger_key)?;
    let new_balance = update_ledger(previous_balance, config.stake, winnings);
    store.set_value(&config.ledger_key, new_balance)?;

    tracing::info!(
        draw = %draw.name,
        primary_hits,
        secondary_hits,
        winnings,
        new_balance,
        "draw evaluated"
    );

    Ok(render_draw_summary(
        draw,
        primary_hits,
        secondary_hits,
        winnings,
        new_balance,
        biggest_tier,
    ))
}
