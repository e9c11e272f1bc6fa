//! Configuration value objects shared by every layer.

pub mod limits;
pub mod validation;
