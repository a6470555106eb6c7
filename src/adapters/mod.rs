//! Adapters - concrete implementations of ports
//!
//! # Available Adapters
//!
//! - **hal_transport**: I2cTransport over any blocking `embedded_hal::i2c::I2c`
//! - **veml6075**: VEML6075 UVA/UVB sensor
//! - **tsl4531**: TSL4531 ambient light sensor

pub mod hal_transport;
pub mod tsl4531;
pub mod veml6075;

pub use hal_transport::HalTransport;
pub use tsl4531::Tsl4531;
pub use veml6075::Veml6075;
