use crate::types::{Draw, PrizeTier};
use crate::utils::iso_week_of_millis;

/// Fixed message when the draw fetch produced nothing for the week.
pub const NO_RESULTS_MESSAGE: &str = "Tuloksia ei saatu Veikkaukselta :(";

/// Separator between per-draw summary lines.
pub const DRAW_SEPARATOR: &str = "\n";

/// Minor currency units as a two-decimal euro amount, "5600" -> "56.00€".
pub fn format_eur(minor_units: i64) -> String {
    format!("{:.2}€", minor_units as f64 / 100.0)
}

fn format_biggest_tier(tier: &PrizeTier) -> String {
    if tier.share_amount == 0 {
        format!("suurin voittoluokka {} ilman voittajia", tier.name)
    } else {
        format!(
            "suurin voittoluokka {} ({})",
            tier.name,
            format_eur(tier.share_amount)
        )
    }
}

/// One report line per draw: week and weekday, hit counts, winnings, the new
/// investment balance (spoilered for the chat channel) and the week's biggest
/// prize tier.
pub fn render_draw_summary(
    draw: &Draw,
    primary_hits: usize,
    secondary_hits: usize,
    winnings: i64,
    new_balance: i64,
    biggest_tier: &PrizeTier,
) -> String {
    let week = iso_week_of_millis(draw.close_time);
    format!(
        "{} viikko {}/{}, {}+{} oikein, voittoa {}, sijoituksen tuotto ||{}||, {}",
        draw.game,
        week,
        draw.weekday,
        primary_hits,
        secondary_hits,
        format_eur(winnings),
        format_eur(new_balance),
        format_biggest_tier(biggest_tier),
    )
}
