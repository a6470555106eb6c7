//! embedded-hal I2C transport adapter
//!
//! Implements the I2cTransport port for any blocking
//! `embedded_hal::i2c::I2c` bus (embassy-rp, rp2040-hal, linux-embedded-hal,
//! shared-bus proxies from embedded-hal-bus, ...).

use embedded_hal::i2c::{ErrorKind, I2c, NoAcknowledgeSource};
use heapless::Vec;

use crate::ports::transport::{I2cTransport, TransportError};

/// Largest write frame: register pointer plus payload
pub const MAX_FRAME_LEN: usize = 8;

/// I2C bus adapter implementing I2cTransport
///
/// Owns the bus. Clock speed is whatever the HAL was configured with when
/// the bus was created.
pub struct HalTransport<I> {
    i2c: I,
}

impl<I: I2c> HalTransport<I> {
    /// Wrap a HAL bus
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I {
        self.i2c
    }
}

/// Map a HAL error onto the port's error type
fn transport_error<E: embedded_hal::i2c::Error>(err: E) -> TransportError {
    match err.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => TransportError::AddressNack,
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => TransportError::DataNack,
        ErrorKind::NoAcknowledge(_) => TransportError::Nack,
        ErrorKind::ArbitrationLoss => TransportError::ArbitrationLoss,
        ErrorKind::Bus => TransportError::Bus,
        ErrorKind::Overrun => TransportError::Overrun,
        _ => TransportError::Other,
    }
}

impl<I: I2c> I2cTransport for HalTransport<I> {
    fn write_bytes(
        &mut self,
        address: u8,
        register: u8,
        payload: &[u8],
    ) -> Result<(), TransportError> {
        let mut frame: Vec<u8, MAX_FRAME_LEN> = Vec::new();
        frame
            .push(register)
            .map_err(|_| TransportError::FrameTooLong)?;
        frame
            .extend_from_slice(payload)
            .map_err(|_| TransportError::FrameTooLong)?;

        trace!("i2c {:#x} write {} bytes to {:#x}", address, frame.len(), register);
        self.i2c.write(address, &frame).map_err(transport_error)
    }

    fn write_then_read(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), TransportError> {
        trace!("i2c {:#x} read {} bytes from {:#x}", address, buffer.len(), register);
        self.i2c
            .write_read(address, &[register], buffer)
            .map_err(transport_error)
    }
}
