//! TSL4531 ambient light sensor adapter
//!
//! Implements the SensorPort trait for the TSL4531 on the SL01 board.

use crate::domain::{LightReading, LuxCalibration, RawLightSample, SensorId};
use crate::ports::sensor::{SensorError, SensorPort};
use crate::ports::transport::{BusConfig, I2cTransport, TransportError};
use crate::registers::tsl4531::{Register, Tsl4531Config};

/// TSL4531 driver
///
/// Lux is `multiplier * count`. The multiplier comes from the integration
/// time written at init, so the two can never disagree.
pub struct Tsl4531<T: I2cTransport> {
    transport: T,
    bus: BusConfig,
    config: Tsl4531Config,
    calibration: LuxCalibration,
    ready: bool,
    last_raw: Option<RawLightSample>,
}

impl<T: I2cTransport> Tsl4531<T> {
    /// Create a driver at the board default address (0x29, 100 kHz)
    pub fn new(transport: T) -> Self {
        Self::with_bus(transport, BusConfig::TSL4531_DEFAULT)
    }

    /// Create a driver bound to a specific address and clock
    pub fn with_bus(transport: T, bus: BusConfig) -> Self {
        let config = Tsl4531Config::default();
        Self {
            transport,
            bus,
            config,
            calibration: config.integration_time.calibration(),
            ready: false,
            last_raw: None,
        }
    }

    /// Power on in continuous mode with 100ms integration
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.init_with_config(Tsl4531Config::default())
    }

    /// Write control and configuration registers
    pub fn init_with_config(&mut self, config: Tsl4531Config) -> Result<(), SensorError> {
        self.ready = false;

        if let Err(err) = self.write_config(&config) {
            error!(
                "TSL4531 @ {:#x}: configuration write failed: {}",
                self.bus.address,
                err
            );
            return Err(err.into());
        }

        self.config = config;
        self.calibration = config.integration_time.calibration();
        self.ready = true;
        debug!(
            "TSL4531 @ {:#x} ({} Hz): {} ms integration, x{} lux multiplier",
            self.bus.address,
            self.bus.clock_hz,
            config.integration_time.as_ms(),
            self.calibration.multiplier
        );
        Ok(())
    }

    fn write_config(&mut self, config: &Tsl4531Config) -> Result<(), TransportError> {
        self.transport.write_bytes(
            self.bus.address,
            Register::Control.command(),
            &[config.control_register()],
        )?;
        self.transport.write_bytes(
            self.bus.address,
            Register::Config.command(),
            &[config.config_register()],
        )
    }

    /// Read the ADC and return illuminance in lux
    pub fn get_lux(&mut self) -> Result<f32, SensorError> {
        Ok(self.measure()?.lux)
    }

    /// Read the ADC and return a tagged reading
    pub fn measure(&mut self) -> Result<LightReading, SensorError> {
        let raw = self.refresh()?;
        Ok(LightReading::new(SensorId::TSL4531, self.calibration.lux(&raw)))
    }

    /// High byte first, then low byte, each its own transaction
    fn refresh(&mut self) -> Result<RawLightSample, SensorError> {
        if !self.ready {
            return Err(SensorError::NotInitialized);
        }

        let high = self.read_byte(Register::DataHigh)?;
        let low = self.read_byte(Register::DataLow)?;

        let sample = RawLightSample::from_bytes(high, low);
        trace!("TSL4531 raw count={}", sample.count);
        self.last_raw = Some(sample);
        Ok(sample)
    }

    fn read_byte(&mut self, register: Register) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        if let Err(err) = self
            .transport
            .write_then_read(self.bus.address, register.command(), &mut buf)
        {
            error!(
                "TSL4531 @ {:#x}: read of {:#x} failed: {}",
                self.bus.address,
                register.command(),
                err
            );
            return Err(err.into());
        }
        Ok(buf[0])
    }

    /// Raw sample from the last successful refresh
    pub fn last_raw(&self) -> Option<RawLightSample> {
        self.last_raw
    }

    /// Lux calibration in effect
    pub fn calibration(&self) -> LuxCalibration {
        self.calibration
    }

    /// Bus binding of this driver
    pub fn bus(&self) -> BusConfig {
        self.bus
    }

    /// Configuration written by the last successful init
    pub fn config(&self) -> Tsl4531Config {
        self.config
    }

    /// Release the underlying transport
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: I2cTransport> SensorPort for Tsl4531<T> {
    type Reading = LightReading;

    fn init(&mut self) -> Result<(), SensorError> {
        Tsl4531::init(self)
    }

    fn read(&mut self) -> Result<LightReading, SensorError> {
        self.measure()
    }

    fn sensor_id(&self) -> SensorId {
        SensorId::TSL4531
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
