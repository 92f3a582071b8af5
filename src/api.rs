use crate::error::Error;
use crate::types::{Draw, DrawPayload};

const DRAW_RESULTS_URL: &str = "https://www.veikkaus.fi/api/draw-results/v1/games/EJACKPOT/draws";

/// Fetch the week's Eurojackpot draws. An empty vector is a normal outcome
/// (results not published yet); malformed payloads fail validation here so
/// the pipeline only ever sees complete draws.
pub async fn fetch_draws(
    client: &reqwest::Client,
    year: i32,
    week: u32,
) -> Result<Vec<Draw>, Error> {
    let url = format!("{DRAW_RESULTS_URL}/by-week/{year}-W{week}");
    tracing::info!(%url, "fetching draw results");

    let payloads: Vec<DrawPayload> = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(Error::Fetch)?
        .json()
        .await
        .map_err(Error::Fetch)?;

    tracing::info!(draws = payloads.len(), "draw results received");
    payloads.into_iter().map(Draw::from_payload).collect()
}
