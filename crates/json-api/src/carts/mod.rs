//! Carts

pub(crate) mod checkout;
pub(crate) mod errors;
mod handlers;
pub(crate) mod items;

pub(crate) use handlers::*;
