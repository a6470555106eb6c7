//! Sensor port - abstraction for reading calibrated measurements
//!
//! Lets an application poll either sensor on the board without knowing
//! its register map.

use core::fmt;

use super::transport::TransportError;
use crate::domain::SensorId;

/// Error type for sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The bus transaction failed
    Transport(TransportError),
    /// `init()` has not completed successfully
    NotInitialized,
}

impl From<TransportError> for SensorError {
    fn from(err: TransportError) -> Self {
        SensorError::Transport(err)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Transport(err) => write!(f, "transport error: {}", err),
            SensorError::NotInitialized => f.write_str("sensor not initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SensorError::Transport(err) => Some(err),
            SensorError::NotInitialized => None,
        }
    }
}

/// Port for reading sensor data
///
/// Every `read` performs a fresh bus refresh; implementations never return
/// a cached reading.
///
/// # Example
///
/// ```ignore
/// fn poll<S: SensorPort>(sensor: &mut S) -> Result<S::Reading, SensorError> {
///     if !sensor.is_ready() {
///         sensor.init()?;
///     }
///     sensor.read()
/// }
/// ```
pub trait SensorPort {
    /// Calibrated reading produced by this sensor
    type Reading;

    /// Configure the device with its default settings
    fn init(&mut self) -> Result<(), SensorError>;

    /// Refresh raw registers and return a calibrated reading
    fn read(&mut self) -> Result<Self::Reading, SensorError>;

    /// Get the sensor identifier
    fn sensor_id(&self) -> SensorId;

    /// Whether `init()` has completed successfully
    fn is_ready(&self) -> bool;
}
