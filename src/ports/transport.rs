//! Transport port - address-scoped register access over I2C
//!
//! Drivers talk to their device only through this trait, so the same driver
//! runs on a HAL bus, a shared-bus proxy or a test double.

use core::fmt;

/// Error type for bus transactions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Device did not acknowledge its address (absent or powered down)
    AddressNack,
    /// Device did not acknowledge a data byte
    DataNack,
    /// Acknowledge missing, source unknown
    Nack,
    /// Lost arbitration to another master
    ArbitrationLoss,
    /// Misplaced start/stop or other bus-level fault
    Bus,
    /// Receive buffer overrun
    Overrun,
    /// Write frame does not fit the transport's buffer
    FrameTooLong,
    /// Any other HAL-specific failure, including timeouts
    Other,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TransportError::AddressNack => "address not acknowledged",
            TransportError::DataNack => "data not acknowledged",
            TransportError::Nack => "not acknowledged",
            TransportError::ArbitrationLoss => "arbitration lost",
            TransportError::Bus => "bus error",
            TransportError::Overrun => "overrun",
            TransportError::FrameTooLong => "frame too long",
            TransportError::Other => "transport failure",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {}

/// Port for register-level I2C access
///
/// Every call is one blocking bus transaction. The implementation frames
/// the bytes (register pointer first, then payload) and drives the bus;
/// the caller supplies the 7-bit device address each time.
///
/// # Example Implementation
///
/// ```ignore
/// struct LoggingBus<B: I2cTransport>(B);
///
/// impl<B: I2cTransport> I2cTransport for LoggingBus<B> {
///     fn write_bytes(&mut self, address: u8, register: u8, payload: &[u8]) -> Result<(), TransportError> {
///         println!("{address:#x} <- {register:#x} {payload:02x?}");
///         self.0.write_bytes(address, register, payload)
///     }
///
///     fn write_then_read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), TransportError> {
///         self.0.write_then_read(address, register, buffer)
///     }
/// }
/// ```
pub trait I2cTransport {
    /// Write `register` followed by `payload` in a single transaction
    ///
    /// An empty payload writes only the register pointer.
    fn write_bytes(&mut self, address: u8, register: u8, payload: &[u8])
        -> Result<(), TransportError>;

    /// Write `register`, then read `buffer.len()` bytes with a repeated start
    fn write_then_read(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), TransportError>;
}

impl<T: I2cTransport + ?Sized> I2cTransport for &mut T {
    fn write_bytes(
        &mut self,
        address: u8,
        register: u8,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        (**self).write_bytes(address, register, payload)
    }

    fn write_then_read(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), TransportError> {
        (**self).write_then_read(address, register, buffer)
    }
}

/// Bus binding for one device: address and clock
///
/// The clock is applied by whoever builds the bus; drivers carry it so the
/// binding can be reported and checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Bus clock in Hz
    pub clock_hz: u32,
}

impl BusConfig {
    /// Standard-mode I2C clock
    pub const DEFAULT_CLOCK_HZ: u32 = 100_000;

    /// VEML6075 on the SL01 board
    pub const VEML6075_DEFAULT: Self = Self::new(0x10);

    /// TSL4531 on the SL01 board
    pub const TSL4531_DEFAULT: Self = Self::new(0x29);

    /// Bind to `address` at the default clock
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            clock_hz: Self::DEFAULT_CLOCK_HZ,
        }
    }

    /// Override the clock speed
    pub const fn with_clock_hz(self, clock_hz: u32) -> Self {
        Self {
            address: self.address,
            clock_hz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_defaults() {
        assert_eq!(BusConfig::VEML6075_DEFAULT.address, 0x10);
        assert_eq!(BusConfig::TSL4531_DEFAULT.address, 0x29);
        assert_eq!(BusConfig::VEML6075_DEFAULT.clock_hz, 100_000);
        assert_eq!(BusConfig::TSL4531_DEFAULT.clock_hz, 100_000);
    }

    #[test]
    fn clock_override_keeps_address() {
        let bus = BusConfig::new(0x11).with_clock_hz(400_000);
        assert_eq!(bus.address, 0x11);
        assert_eq!(bus.clock_hz, 400_000);
    }
}
