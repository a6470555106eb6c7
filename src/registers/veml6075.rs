//! VEML6075 register map and configuration codes
//!
//! Codes are OR'd together into the low byte of the 16-bit UV_CONF register.

/// VEML6075 register addresses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// UV_CONF: integration time, dynamic range, trigger, force, shutdown
    Config = 0x00,
    /// UVA data
    Uva = 0x07,
    /// UVB data
    Uvb = 0x09,
    /// UVCOMP1, visible compensation
    VisibleComp = 0x0A,
    /// UVCOMP2, IR compensation
    IrComp = 0x0B,
}

impl Register {
    /// Register address on the bus
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// UV_IT integration time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntegrationTime {
    Ms50 = 0x00,
    #[default]
    Ms100 = 0x10,
    Ms200 = 0x20,
    Ms400 = 0x30,
    Ms800 = 0x40,
}

impl IntegrationTime {
    /// Integration time in milliseconds
    pub const fn as_ms(self) -> u16 {
        match self {
            IntegrationTime::Ms50 => 50,
            IntegrationTime::Ms100 => 100,
            IntegrationTime::Ms200 => 200,
            IntegrationTime::Ms400 => 400,
            IntegrationTime::Ms800 => 800,
        }
    }
}

/// HD dynamic range setting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DynamicRange {
    #[default]
    Normal = 0x00,
    High = 0x80,
}

/// UV_TRIG measurement trigger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Trigger {
    /// No trigger, normal operation
    #[default]
    Normal = 0x00,
    /// Trigger a single measurement
    Once = 0x04,
}

/// UV_AF active force mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ActiveForce {
    /// Device measures on its own schedule
    #[default]
    Auto = 0x00,
    /// Measure only when triggered
    Forced = 0x02,
}

/// SD shutdown bit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Shutdown {
    #[default]
    PowerOn = 0x00,
    PowerOff = 0x01,
}

/// Complete UV_CONF setting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Veml6075Config {
    pub integration_time: IntegrationTime,
    pub dynamic_range: DynamicRange,
    pub trigger: Trigger,
    pub active_force: ActiveForce,
    pub shutdown: Shutdown,
}

impl Veml6075Config {
    /// 100ms, normal range, no trigger, auto, powered on
    pub const fn new() -> Self {
        Self {
            integration_time: IntegrationTime::Ms100,
            dynamic_range: DynamicRange::Normal,
            trigger: Trigger::Normal,
            active_force: ActiveForce::Auto,
            shutdown: Shutdown::PowerOn,
        }
    }

    /// Set the integration time
    pub const fn integration_time(mut self, it: IntegrationTime) -> Self {
        self.integration_time = it;
        self
    }

    /// Set the dynamic range
    pub const fn dynamic_range(mut self, hd: DynamicRange) -> Self {
        self.dynamic_range = hd;
        self
    }

    /// Set the trigger mode
    pub const fn trigger(mut self, trig: Trigger) -> Self {
        self.trigger = trig;
        self
    }

    /// Set the active force mode
    pub const fn active_force(mut self, af: ActiveForce) -> Self {
        self.active_force = af;
        self
    }

    /// Set the shutdown bit
    pub const fn shutdown(mut self, sd: Shutdown) -> Self {
        self.shutdown = sd;
        self
    }

    /// Register byte for UV_CONF
    pub const fn to_register(&self) -> u8 {
        self.integration_time as u8
            | self.dynamic_range as u8
            | self.trigger as u8
            | self.active_force as u8
            | self.shutdown as u8
    }
}
