//! Money amounts at the JSON boundary.
//!
//! Amounts are `Decimal` everywhere inside the app and plain JSON numbers on the wire.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use salvo::http::StatusError;

use bazaar_app::domain::pricing::round_money;

/// Render a money amount as a JSON number.
pub(crate) fn to_json(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Parse a money amount from a JSON number, rounded to cents.
pub(crate) fn from_json(amount: f64) -> Result<Decimal, StatusError> {
    if !amount.is_finite() {
        return Err(StatusError::bad_request().brief("Price must be a finite number"));
    }

    Decimal::from_f64(amount)
        .map(round_money)
        .ok_or_else(|| StatusError::bad_request().brief("Price is out of range"))
}
