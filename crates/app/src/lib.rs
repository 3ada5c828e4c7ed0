//! Shared application domain and in-memory storage modules.

pub mod context;
pub mod domain;
pub mod ids;
pub mod payments;
pub mod store;

#[cfg(test)]
mod test;
