//! TSL4531 register map and configuration codes
//!
//! Every register access goes through the command register: the register
//! address is sent with the command bit (0x80) set.

use crate::domain::LuxCalibration;

/// Command bit, must be written as 1
pub const COMMAND: u8 = 0x80;

/// TSL4531 register addresses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Power state
    Control = 0x00,
    /// Integration time and power save
    Config = 0x01,
    /// ADC low byte
    DataLow = 0x04,
    /// ADC high byte
    DataHigh = 0x05,
}

impl Register {
    /// Byte to send on the bus, address with the command bit set
    pub const fn command(self) -> u8 {
        COMMAND | self as u8
    }
}

/// Control register operating mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerMode {
    PowerDown = 0x00,
    /// Run one conversion, then power down
    RunOnce = 0x02,
    /// Continuous conversions
    #[default]
    Continuous = 0x03,
}

/// TCNTRL integration time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntegrationTime {
    #[default]
    Ms100 = 0x02,
    Ms200 = 0x01,
    Ms400 = 0x00,
}

impl IntegrationTime {
    /// Integration time in milliseconds
    pub const fn as_ms(self) -> u16 {
        match self {
            IntegrationTime::Ms100 => 100,
            IntegrationTime::Ms200 => 200,
            IntegrationTime::Ms400 => 400,
        }
    }

    /// Datasheet lux multiplier for this integration time
    pub const fn calibration(self) -> LuxCalibration {
        match self {
            IntegrationTime::Ms100 => LuxCalibration::IT_100MS,
            IntegrationTime::Ms200 => LuxCalibration::IT_200MS,
            IntegrationTime::Ms400 => LuxCalibration::IT_400MS,
        }
    }
}

/// PSAVESKIP bit in the configuration register
pub const POWER_SAVE: u8 = 0x08;

/// TSL4531 control and configuration settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tsl4531Config {
    pub power_mode: PowerMode,
    pub integration_time: IntegrationTime,
    pub power_save: bool,
}

impl Tsl4531Config {
    /// Continuous, 100ms, power save off
    pub const fn new() -> Self {
        Self {
            power_mode: PowerMode::Continuous,
            integration_time: IntegrationTime::Ms100,
            power_save: false,
        }
    }

    /// Set the operating mode
    pub const fn power_mode(mut self, mode: PowerMode) -> Self {
        self.power_mode = mode;
        self
    }

    /// Set the integration time
    pub const fn integration_time(mut self, it: IntegrationTime) -> Self {
        self.integration_time = it;
        self
    }

    /// Enable or disable power save
    pub const fn power_save(mut self, enabled: bool) -> Self {
        self.power_save = enabled;
        self
    }

    /// Byte for the control register
    pub const fn control_register(&self) -> u8 {
        self.power_mode as u8
    }

    /// Byte for the configuration register
    pub const fn config_register(&self) -> u8 {
        let psave = if self.power_save { POWER_SAVE } else { 0 };
        self.integration_time as u8 | psave
    }
}
