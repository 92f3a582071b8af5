pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod pipeline;
pub mod reports;
pub mod sink;
pub mod types;
pub mod utils;
pub mod winnings;

pub use error::Error;
