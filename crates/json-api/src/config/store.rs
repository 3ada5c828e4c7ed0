//! Store Config

use std::time::Duration;

use clap::{ArgAction, Args};

/// In-memory store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Start with the demo product catalog.
    #[arg(long, env = "SEED_CATALOG", action = ArgAction::Set, default_value_t = true)]
    pub seed_catalog: bool,

    /// Simulated payment provider latency during checkout.
    #[arg(long, env = "PAYMENT_DELAY_MS", default_value_t = 2_000_u64)]
    pub payment_delay_ms: u64,
}

impl StoreConfig {
    /// Payment latency as a duration.
    #[must_use]
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}
