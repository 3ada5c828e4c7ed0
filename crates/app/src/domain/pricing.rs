//! Prices

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places money amounts are rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Errors that can occur while calculating a total price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Multiplying or summing line amounts exceeded the decimal range.
    #[error("price calculation overflowed")]
    Overflow,
}

/// Round a money amount to two decimal places, midpoints away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the rounded total of `(unit price, quantity)` lines.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: a line amount or the running sum overflowed.
pub fn total_price<I>(lines: I) -> Result<Decimal, PricingError>
where
    I: IntoIterator<Item = (Decimal, u32)>,
{
    let total = lines
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, (price, quantity)| {
            price
                .checked_mul(Decimal::from(quantity))
                .and_then(|line| acc.checked_add(line))
        })
        .ok_or(PricingError::Overflow)?;

    Ok(round_money(total))
}
