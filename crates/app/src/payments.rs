//! Payment authorisation.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::domain::carts::models::CartId;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment declined")]
    Declined,
}

/// External payment provider consulted before an order is committed.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorise a charge for the given cart.
    async fn authorize(&self, cart: CartId, amount: Decimal) -> Result<(), PaymentError>;
}

/// Stand-in provider that waits a fixed delay and approves every charge.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentGateway {
    delay: Duration,
}

impl SimulatedPaymentGateway {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn authorize(&self, cart: CartId, amount: Decimal) -> Result<(), PaymentError> {
        debug!(cart = %cart, amount = %amount, delay_ms = self.delay.as_millis(), "authorising payment");

        tokio::time::sleep(self.delay).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn simulated_gateway_waits_then_approves() -> TestResult {
        let gateway = SimulatedPaymentGateway::new(Duration::from_millis(20));
        let started = Instant::now();

        gateway.authorize(CartId::new(1), Decimal::ONE).await?;

        assert!(
            started.elapsed() >= Duration::from_millis(20),
            "gateway should wait for the configured delay"
        );

        Ok(())
    }
}
