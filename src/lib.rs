//! SL01 UV and ambient light drivers
//!
//! Drivers for the two I2C sensors on the SL01 board: the VEML6075
//! (UVA, UVB, UV index) and the TSL4531 (illuminance). Raw register counts
//! are turned into calibrated readings with fixed datasheet coefficients.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - RawUvSample / RawLightSample                                  │
//! │  - UvReading / LightReading                                      │
//! │  - UvCompensation / LuxCalibration                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - I2cTransport: register writes and reads                       │
//! │  - SensorPort: read a calibrated measurement                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - HalTransport: embedded-hal I2C bus                            │
//! │  - Veml6075: UV sensor                                           │
//! │  - Tsl4531: ambient light sensor                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sl01::{HalTransport, Tsl4531, Veml6075};
//!
//! // Two drivers on one bus: share it with embedded-hal-bus
//! let bus = core::cell::RefCell::new(i2c);
//! let mut uv = Veml6075::new(HalTransport::new(RefCellDevice::new(&bus)));
//! let mut light = Tsl4531::new(HalTransport::new(RefCellDevice::new(&bus)));
//!
//! uv.init()?;
//! light.init()?;
//!
//! loop {
//!     let reading = uv.measure()?;
//!     info!("UVA {} UVB {} UVI {}", reading.uva, reading.uvb, reading.uv_index);
//!     info!("Light {} lux", light.get_lux()?);
//!     delay.delay_ms(2000);
//! }
//! ```
//!
//! # Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format`
//! - `log`: log through the `log` crate
//! - `serde`: derive `Serialize`/`Deserialize` on samples and readings
//! - `std`: implement `std::error::Error` for the error types

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// Must come first so the logging macros are visible in every module.
mod fmt;

/// Domain layer - samples, readings, calibration
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Register maps and configuration codes
pub mod registers;

/// Adapters - concrete implementations
pub mod adapters;

pub use domain::{
    LightReading, LuxCalibration, RawLightSample, RawUvSample, SensorId, UvCompensation,
    UvReading,
};

pub use ports::{BusConfig, I2cTransport, SensorError, SensorPort, TransportError};

pub use registers::{Tsl4531Config, Veml6075Config};

pub use adapters::{HalTransport, Tsl4531, Veml6075};
