//! Busy indicators shown while a request is in flight

pub mod spinner;
