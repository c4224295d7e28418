//! Core data types

pub mod metering_state;
pub mod platform;
