//! Calibrated reading entities
//!
//! A reading is what a driver hands back after a refresh: physical units,
//! tagged with the sensor that produced them. Nothing here knows about the bus.

/// A UV measurement from the VEML6075.
///
/// Intensities are in µW/m² as defined by the VEML6075 application note;
/// the UV index is dimensionless. Values are not clamped, so a strong
/// compensation term can drive them negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UvReading {
    /// Sensor identifier
    pub sensor_id: SensorId,
    /// Compensated UVA intensity
    pub uva: f32,
    /// Compensated UVB intensity
    pub uvb: f32,
    /// UV index derived from `uva` and `uvb`
    pub uv_index: f32,
}

impl UvReading {
    /// Create a new UV reading
    pub const fn new(sensor_id: SensorId, uva: f32, uvb: f32, uv_index: f32) -> Self {
        Self {
            sensor_id,
            uva,
            uvb,
            uv_index,
        }
    }
}

/// An illuminance measurement from the TSL4531.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightReading {
    /// Sensor identifier
    pub sensor_id: SensorId,
    /// Illuminance in lux
    pub lux: f32,
}

impl LightReading {
    /// Create a new light reading
    pub const fn new(sensor_id: SensorId, lux: f32) -> Self {
        Self { sensor_id, lux }
    }
}

/// Sensor identifier (memory-efficient representation)
///
/// Uses a single byte to identify sensors so readings stay `Copy` and
/// allocation-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorId(pub u8);

impl SensorId {
    /// VEML6075 UVA/UVB sensor
    pub const VEML6075: SensorId = SensorId(1);

    /// TSL4531 ambient light sensor
    pub const TSL4531: SensorId = SensorId(2);

    /// Test/mock sensor
    pub const TEST: SensorId = SensorId(255);

    /// Create a new sensor ID from a raw value
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the string representation of this sensor ID
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            1 => "veml6075",
            2 => "tsl4531",
            255 => "test",
            _ => "unknown",
        }
    }

    /// Get the raw ID value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_id_names() {
        assert_eq!(SensorId::VEML6075.as_str(), "veml6075");
        assert_eq!(SensorId::TSL4531.as_str(), "tsl4531");
        assert_eq!(SensorId::new(42).as_str(), "unknown");
        assert_eq!(SensorId::TSL4531.value(), 2);
    }
}
