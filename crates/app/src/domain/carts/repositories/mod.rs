//! Cart Repositories

mod carts;

pub(crate) use carts::CartsRepository;
