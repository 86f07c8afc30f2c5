//! Business logic on top of the `db` layer

pub mod reopen;
pub mod zone;
