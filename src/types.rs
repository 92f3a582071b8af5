use crate::error::Error;
use chrono::DateTime;
use serde::Deserialize;

/// One draw as returned by the Veikkaus draw-results API. Every field is
/// optional here; `Draw::from_payload` rejects payloads with missing fields
/// so nothing downstream has to re-check presence.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawPayload {
    pub game_name: Option<String>,
    pub brand_name: Option<String>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub open_time: Option<i64>,
    pub close_time: Option<i64>,
    pub draw_time: Option<i64>,
    pub results_available_time: Option<i64>,
    pub results: Option<Vec<DrawNumbersPayload>>,
    pub prize_tiers: Option<Vec<PrizeTierPayload>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawNumbersPayload {
    pub primary: Option<Vec<String>>,
    pub secondary: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTierPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub share_count: Option<i64>,
    pub share_amount: Option<i64>,
    pub additional_prize_tier: Option<bool>,
}

/// Validated draw. `weekday` and `game` come from splitting `brandName`
/// (format `"<weekday>-<game>"`) on its first `-`.
#[derive(Debug, Clone)]
pub struct Draw {
    pub id: i64,
    pub name: String,
    pub game_name: String,
    pub brand_name: String,
    pub weekday: String,
    pub game: String,
    pub status: String,
    pub open_time: i64,
    pub close_time: i64,
    pub draw_time: i64,
    pub results_available_time: i64,
    pub results: Vec<DrawNumbers>,
    pub prize_tiers: Vec<PrizeTier>,
}

/// Drawn number sets for one draw. Source order is preserved; matching does
/// not depend on it.
#[derive(Debug, Clone)]
pub struct DrawNumbers {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PrizeTier {
    pub id: String,
    pub name: String,
    pub share_count: i64,
    pub share_amount: i64,
    pub additional_prize_tier: bool,
}

fn required<T>(value: Option<T>, draw: &str, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| Error::MalformedDraw {
        draw: draw.to_string(),
        field,
    })
}

impl Draw {
    pub fn from_payload(payload: DrawPayload) -> Result<Self, Error> {
        let label = payload
            .name
            .clone()
            .or_else(|| payload.id.map(|id| id.to_string()))
            .unwrap_or_else(|| "<unknown>".to_string());

        let brand_name = required(payload.brand_name, &label, "brandName")?;
        let (weekday, game) = match brand_name.split_once('-') {
            Some((weekday, game)) => (weekday.to_string(), game.to_string()),
            None => {
                return Err(Error::MalformedDraw {
                    draw: label,
                    field: "brandName",
                });
            }
        };

        let close_time = required(payload.close_time, &label, "closeTime")?;
        if DateTime::from_timestamp_millis(close_time).is_none() {
            return Err(Error::MalformedDraw {
                draw: label,
                field: "closeTime",
            });
        }

        let results = required(payload.results, &label, "results")?
            .into_iter()
            .map(|r| DrawNumbers::from_payload(r, &label))
            .collect::<Result<Vec<_>, _>>()?;
        let prize_tiers = required(payload.prize_tiers, &label, "prizeTiers")?
            .into_iter()
            .map(|t| PrizeTier::from_payload(t, &label))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Draw {
            id: required(payload.id, &label, "id")?,
            name: required(payload.name, &label, "name")?,
            game_name: required(payload.game_name, &label, "gameName")?,
            brand_name,
            weekday,
            game,
            status: required(payload.status, &label, "status")?,
            open_time: required(payload.open_time, &label, "openTime")?,
            close_time,
            draw_time: required(payload.draw_time, &label, "drawTime")?,
            results_available_time: required(
                payload.results_available_time,
                &label,
                "resultsAvailableTime",
            )?,
            results,
            prize_tiers,
        })
    }

    /// Primary/secondary sets of the first (and in practice only) result,
    /// empty slices when no results have been published yet.
    pub fn drawn_numbers(&self) -> (&[String], &[String]) {
        match self.results.first() {
            Some(numbers) => (&numbers.primary, &numbers.secondary),
            None => (&[], &[]),
        }
    }
}

impl DrawNumbers {
    fn from_payload(payload: DrawNumbersPayload, draw: &str) -> Result<Self, Error> {
        Ok(DrawNumbers {
            primary: required(payload.primary, draw, "results.primary")?,
            secondary: required(payload.secondary, draw, "results.secondary")?,
        })
    }
}

impl PrizeTier {
    fn from_payload(payload: PrizeTierPayload, draw: &str) -> Result<Self, Error> {
        Ok(PrizeTier {
            id: required(payload.id, draw, "prizeTiers.id")?,
            name: required(payload.name, draw, "prizeTiers.name")?,
            share_count: required(payload.share_count, draw, "prizeTiers.shareCount")?,
            share_amount: required(payload.share_amount, draw, "prizeTiers.shareAmount")?,
            additional_prize_tier: required(
                payload.additional_prize_tier,
                draw,
                "prizeTiers.additionalPrizeTier",
            )?,
        })
    }
}
