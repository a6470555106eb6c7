//! Ports (interfaces) defining the boundaries of the crate
//!
//! - **I2cTransport**: how drivers reach their device registers
//! - **SensorPort**: how an application reads a calibrated measurement

pub mod sensor;
pub mod transport;

pub use sensor::{SensorError, SensorPort};
pub use transport::{BusConfig, I2cTransport, TransportError};
