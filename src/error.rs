use thiserror::Error;

/// Errors produced while evaluating a week's draws.
#[derive(Debug, Error)]
pub enum Error {
    #[error("draw {draw}: missing required field `{field}`")]
    MalformedDraw { draw: String, field: &'static str },

    #[error("draw {draw}: no prize tiers published")]
    EmptyTierList { draw: String },

    #[error("ledger store unavailable")]
    LedgerUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("draw results request failed")]
    Fetch(#[source] reqwest::Error),

    #[error("message delivery failed")]
    Delivery(#[source] reqwest::Error),
}

impl Error {
    pub fn ledger(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::LedgerUnavailable(Box::new(source))
    }
}
