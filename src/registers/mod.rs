//! Register maps for the two SL01 devices
//!
//! Addresses and configuration codes are closed enums, so only values the
//! datasheets define can reach the bus.

pub mod tsl4531;
pub mod veml6075;

pub use tsl4531::Tsl4531Config;
pub use veml6075::Veml6075Config;
