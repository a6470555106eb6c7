//! Domain layer - pure measurement logic independent of the bus
//!
//! Raw samples, calibrated readings and the calibration services that turn
//! one into the other.

pub mod calibration;
pub mod reading;
pub mod sample;

pub use calibration::{LuxCalibration, UvCompensation};
pub use reading::{LightReading, SensorId, UvReading};
pub use sample::{RawLightSample, RawUvSample};
