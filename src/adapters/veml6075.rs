//! VEML6075 UVA/UVB sensor adapter
//!
//! Implements the SensorPort trait for the Vishay VEML6075 on the SL01 board.
//! Each measurement reads all four data registers and applies the open air
//! compensation from the Vishay application note.

use crate::domain::{RawUvSample, SensorId, UvCompensation, UvReading};
use crate::ports::sensor::{SensorError, SensorPort};
use crate::ports::transport::{BusConfig, I2cTransport, TransportError};
use crate::registers::veml6075::{Register, Veml6075Config};

/// VEML6075 driver
///
/// The sensor is not usable until `init()` succeeds; every getter before
/// that returns `SensorError::NotInitialized` without touching the bus.
pub struct Veml6075<T: I2cTransport> {
    transport: T,
    bus: BusConfig,
    config: Veml6075Config,
    compensation: UvCompensation,
    ready: bool,
    /// Last complete raw sample (diagnostics only)
    last_raw: Option<RawUvSample>,
}

impl<T: I2cTransport> Veml6075<T> {
    /// Create a driver at the board default address (0x10, 100 kHz)
    pub fn new(transport: T) -> Self {
        Self::with_bus(transport, BusConfig::VEML6075_DEFAULT)
    }

    /// Create a driver bound to a specific address and clock
    pub fn with_bus(transport: T, bus: BusConfig) -> Self {
        Self {
            transport,
            bus,
            config: Veml6075Config::default(),
            compensation: UvCompensation::OPEN_AIR,
            ready: false,
            last_raw: None,
        }
    }

    /// Configure the sensor for 100ms integration in auto mode
    pub fn init(&mut self) -> Result<(), SensorError> {
        self.init_with_config(Veml6075Config::default())
    }

    /// Configure the sensor with a custom UV_CONF setting
    ///
    /// Two separate writes: the configuration byte, then the bare register
    /// pointer. A failure in either leaves the driver not ready.
    pub fn init_with_config(&mut self, config: Veml6075Config) -> Result<(), SensorError> {
        self.ready = false;

        let conf = config.to_register();
        if let Err(err) = self.write_config(conf) {
            error!(
                "VEML6075 @ {:#x}: configuration write failed: {}",
                self.bus.address,
                err
            );
            return Err(err.into());
        }

        self.config = config;
        self.ready = true;
        debug!(
            "VEML6075 @ {:#x} ({} Hz): configured {:#x}",
            self.bus.address,
            self.bus.clock_hz,
            conf
        );
        Ok(())
    }

    fn write_config(&mut self, conf: u8) -> Result<(), TransportError> {
        let reg = Register::Config.addr();
        self.transport.write_bytes(self.bus.address, reg, &[conf])?;
        self.transport.write_bytes(self.bus.address, reg, &[])
    }

    /// Read and return compensated UVA intensity
    pub fn get_uva(&mut self) -> Result<f32, SensorError> {
        let raw = self.refresh()?;
        Ok(self.compensation.uva(&raw))
    }

    /// Read and return compensated UVB intensity
    pub fn get_uvb(&mut self) -> Result<f32, SensorError> {
        let raw = self.refresh()?;
        Ok(self.compensation.uvb(&raw))
    }

    /// Read and return the UV index
    pub fn get_uv_index(&mut self) -> Result<f32, SensorError> {
        Ok(self.measure()?.uv_index)
    }

    /// Read all registers once and return UVA, UVB and index together
    pub fn measure(&mut self) -> Result<UvReading, SensorError> {
        let raw = self.refresh()?;
        let uva = self.compensation.uva(&raw);
        let uvb = self.compensation.uvb(&raw);
        let uv_index = self.compensation.uv_index(uva, uvb);
        Ok(UvReading::new(SensorId::VEML6075, uva, uvb, uv_index))
    }

    /// Read the four data registers in order UVA, UVB, UVCOMP1, UVCOMP2
    fn refresh(&mut self) -> Result<RawUvSample, SensorError> {
        if !self.ready {
            return Err(SensorError::NotInitialized);
        }

        let uva = self.read_word(Register::Uva)?;
        let uvb = self.read_word(Register::Uvb)?;
        let visible_comp = self.read_word(Register::VisibleComp)?;
        let ir_comp = self.read_word(Register::IrComp)?;

        let sample = RawUvSample::new(uva, uvb, visible_comp, ir_comp);
        trace!(
            "VEML6075 raw uva={} uvb={} comp1={} comp2={}",
            uva,
            uvb,
            visible_comp,
            ir_comp
        );
        self.last_raw = Some(sample);
        Ok(sample)
    }

    fn read_word(&mut self, register: Register) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        if let Err(err) = self
            .transport
            .write_then_read(self.bus.address, register.addr(), &mut buf)
        {
            error!(
                "VEML6075 @ {:#x}: read of {:#x} failed: {}",
                self.bus.address,
                register.addr(),
                err
            );
            return Err(err.into());
        }
        Ok(RawUvSample::word_from_le(buf))
    }

    /// Raw sample from the last successful refresh
    pub fn last_raw(&self) -> Option<RawUvSample> {
        self.last_raw
    }

    /// Bus binding of this driver
    pub fn bus(&self) -> BusConfig {
        self.bus
    }

    /// Configuration written by the last successful init
    pub fn config(&self) -> Veml6075Config {
        self.config
    }

    /// Release the underlying transport
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: I2cTransport> SensorPort for Veml6075<T> {
    type Reading = UvReading;

    fn init(&mut self) -> Result<(), SensorError> {
        Veml6075::init(self)
    }

    fn read(&mut self) -> Result<UvReading, SensorError> {
        self.measure()
    }

    fn sensor_id(&self) -> SensorId {
        SensorId::VEML6075
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HalTransport;
    use crate::registers::veml6075::{ActiveForce, DynamicRange, IntegrationTime};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x10;

    fn init_writes(addr: u8, conf: u8) -> [I2cTransaction; 2] {
        [
            I2cTransaction::write(addr, vec![0x00, conf]),
            I2cTransaction::write(addr, vec![0x00]),
        ]
    }

    /// Four register reads returning the given little-endian words
    fn refresh_reads(uva: u16, uvb: u16, comp1: u16, comp2: u16) -> [I2cTransaction; 4] {
        [
            I2cTransaction::write_read(ADDR, vec![0x07], uva.to_le_bytes().to_vec()),
            I2cTransaction::write_read(ADDR, vec![0x09], uvb.to_le_bytes().to_vec()),
            I2cTransaction::write_read(ADDR, vec![0x0A], comp1.to_le_bytes().to_vec()),
            I2cTransaction::write_read(ADDR, vec![0x0B], comp2.to_le_bytes().to_vec()),
        ]
    }

    fn expected_uva(uva: u16, comp1: u16, comp2: u16) -> f32 {
        uva as f32 - (2.22 * comp1 as f32 - 1.33 * comp2 as f32)
    }

    fn expected_uvb(uvb: u16, comp1: u16, comp2: u16) -> f32 {
        uvb as f32 - (2.95 * comp1 as f32 - 1.74 * comp2 as f32)
    }

    #[test]
    fn init_is_two_separate_writes() {
        let mut i2c = I2cMock::new(&init_writes(ADDR, 0x10));
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));

        assert!(!uv.is_ready());
        uv.init().unwrap();
        assert!(uv.is_ready());
        assert_eq!(uv.config(), Veml6075Config::default());

        i2c.done();
    }

    #[test]
    fn init_with_custom_config_and_address() {
        let conf = Veml6075Config::new()
            .integration_time(IntegrationTime::Ms400)
            .dynamic_range(DynamicRange::High)
            .active_force(ActiveForce::Forced);
        let mut i2c = I2cMock::new(&init_writes(0x11, 0x30 | 0x80 | 0x02));
        let bus = BusConfig::new(0x11).with_clock_hz(400_000);
        let mut uv = Veml6075::with_bus(HalTransport::new(i2c.clone()), bus);

        uv.init_with_config(conf).unwrap();
        assert_eq!(uv.config(), conf);
        assert_eq!(uv.bus(), bus);

        i2c.done();
    }

    #[test]
    fn failed_first_write_propagates_and_skips_second() {
        let expectations =
            [I2cTransaction::write(ADDR, vec![0x00, 0x10]).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));

        assert_eq!(
            uv.init(),
            Err(SensorError::Transport(TransportError::Other))
        );
        assert!(!uv.is_ready());

        i2c.done();
    }

    #[test]
    fn failed_trailing_write_leaves_driver_unready() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x00, 0x10]),
            I2cTransaction::write(ADDR, vec![0x00]).with_error(ErrorKind::Bus),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));

        assert_eq!(uv.init(), Err(SensorError::Transport(TransportError::Bus)));
        assert!(!uv.is_ready());
        // No bus traffic once init has failed
        assert_eq!(uv.get_uva(), Err(SensorError::NotInitialized));

        i2c.done();
    }

    #[test]
    fn getters_require_init() {
        let expectations: [I2cTransaction; 0] = [];
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));

        assert_eq!(uv.get_uva(), Err(SensorError::NotInitialized));
        assert_eq!(uv.get_uvb(), Err(SensorError::NotInitialized));
        assert_eq!(uv.get_uv_index(), Err(SensorError::NotInitialized));
        assert_eq!(uv.measure(), Err(SensorError::NotInitialized));
        assert_eq!(uv.last_raw(), None);

        i2c.done();
    }

    #[test]
    fn getters_match_closed_form() {
        let (uva, uvb, comp1, comp2) = (0x1234u16, 0x0800u16, 120u16, 45u16);
        let mut expectations = init_writes(ADDR, 0x10).to_vec();
        expectations.extend(refresh_reads(uva, uvb, comp1, comp2));
        expectations.extend(refresh_reads(uva, uvb, comp1, comp2));
        expectations.extend(refresh_reads(uva, uvb, comp1, comp2));
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));
        uv.init().unwrap();

        let got_uva = uv.get_uva().unwrap();
        let got_uvb = uv.get_uvb().unwrap();
        let got_index = uv.get_uv_index().unwrap();

        assert_eq!(got_uva, expected_uva(uva, comp1, comp2));
        assert_eq!(got_uvb, expected_uvb(uvb, comp1, comp2));
        let expected_index = (got_uva / 684.46 + got_uvb / 385.95) / 2.0;
        assert!((got_index - expected_index).abs() < 1e-4);
        assert_eq!(uv.last_raw(), Some(RawUvSample::new(uva, uvb, comp1, comp2)));

        i2c.done();
    }

    #[test]
    fn register_bytes_are_little_endian() {
        let mut expectations = init_writes(ADDR, 0x10).to_vec();
        expectations.extend([
            I2cTransaction::write_read(ADDR, vec![0x07], vec![0x34, 0x12]),
            I2cTransaction::write_read(ADDR, vec![0x09], vec![0x00, 0x00]),
            I2cTransaction::write_read(ADDR, vec![0x0A], vec![0x00, 0x00]),
            I2cTransaction::write_read(ADDR, vec![0x0B], vec![0x00, 0x00]),
        ]);
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));
        uv.init().unwrap();

        // Zero compensation leaves the raw count untouched
        assert_eq!(uv.get_uva().unwrap(), 4660.0);

        i2c.done();
    }

    #[test]
    fn every_call_refreshes() {
        let mut expectations = init_writes(ADDR, 0x10).to_vec();
        expectations.extend(refresh_reads(100, 50, 0, 0));
        expectations.extend(refresh_reads(200, 60, 0, 0));
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));
        uv.init().unwrap();

        let first = uv.get_uva().unwrap();
        let second = uv.get_uva().unwrap();
        assert_eq!(first, 100.0);
        assert_eq!(second, 200.0);

        i2c.done();
    }

    #[test]
    fn negative_index_is_reported() {
        let mut expectations = init_writes(ADDR, 0x10).to_vec();
        expectations.extend(refresh_reads(10, 10, 1000, 0));
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));
        uv.init().unwrap();

        let reading = uv.measure().unwrap();
        assert_eq!(reading.sensor_id, SensorId::VEML6075);
        assert_eq!(reading.uva, 10.0 - 2220.0);
        assert!(reading.uv_index < 0.0);

        i2c.done();
    }

    #[test]
    fn failed_read_aborts_refresh() {
        let mut expectations = init_writes(ADDR, 0x10).to_vec();
        expectations.extend(refresh_reads(1, 2, 3, 4));
        expectations.extend([
            I2cTransaction::write_read(ADDR, vec![0x07], vec![0x10, 0x00]),
            I2cTransaction::write_read(ADDR, vec![0x09], vec![0x00, 0x00])
                .with_error(ErrorKind::Overrun),
        ]);
        let mut i2c = I2cMock::new(&expectations);
        let mut uv = Veml6075::new(HalTransport::new(i2c.clone()));
        uv.init().unwrap();

        uv.measure().unwrap();
        assert_eq!(
            uv.get_uvb(),
            Err(SensorError::Transport(TransportError::Overrun))
        );
        // The half-read sample is discarded
        assert_eq!(uv.last_raw(), Some(RawUvSample::new(1, 2, 3, 4)));
        assert!(uv.is_ready());

        i2c.done();
    }

    #[test]
    fn sensor_port_reads_through_trait() {
        fn poll<S: SensorPort>(sensor: &mut S) -> Result<S::Reading, SensorError> {
            if !sensor.is_ready() {
                sensor.init()?;
            }
            sensor.read()
        }

        let mut expectations = init_writes(ADDR, 0x10).to_vec();
        expectations.extend(refresh_reads(684, 386, 0, 0));
        let mut i2c = I2cMock::new(&expectations);
        let mut bus = HalTransport::new(i2c.clone());
        let mut uv = Veml6075::new(&mut bus);

        let reading = poll(&mut uv).unwrap();
        assert_eq!(uv.sensor_id(), SensorId::VEML6075);
        assert_eq!(reading.uva, 684.0);
        assert_eq!(reading.uvb, 386.0);
        assert!((reading.uv_index - 1.0).abs() < 0.01);

        drop(uv);
        i2c.done();
    }
}
