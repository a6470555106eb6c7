//! Raw register samples
//!
//! Transient values assembled from register bytes. A sample is rebuilt on
//! every refresh and only ever exists complete: either all registers were
//! read or there is no sample.

/// Raw counts read from the four VEML6075 data registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawUvSample {
    /// UVA channel count
    pub uva: u16,
    /// UVB channel count
    pub uvb: u16,
    /// Visible compensation channel (UVCOMP1)
    pub visible_comp: u16,
    /// IR compensation channel (UVCOMP2)
    pub ir_comp: u16,
}

impl RawUvSample {
    /// Create a sample from already assembled counts
    pub const fn new(uva: u16, uvb: u16, visible_comp: u16, ir_comp: u16) -> Self {
        Self {
            uva,
            uvb,
            visible_comp,
            ir_comp,
        }
    }

    /// Assemble one 16-bit register value as sent by the VEML6075.
    ///
    /// The device returns the low byte first: `[low, high]`.
    #[inline]
    pub const fn word_from_le(bytes: [u8; 2]) -> u16 {
        u16::from_le_bytes(bytes)
    }
}

/// Raw 16-bit count from the TSL4531 data registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawLightSample {
    /// ADC count, `(high << 8) | low`
    pub count: u16,
}

impl RawLightSample {
    /// Build a sample from the separately read high and low bytes
    #[inline]
    pub const fn from_bytes(high: u8, low: u8) -> Self {
        Self {
            count: ((high as u16) << 8) | low as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uv_words_are_little_endian() {
        assert_eq!(RawUvSample::word_from_le([0x34, 0x12]), 0x1234);
        assert_eq!(RawUvSample::word_from_le([0x34, 0x12]), 4660);
        assert_eq!(RawUvSample::word_from_le([0xFF, 0x00]), 255);
        assert_eq!(RawUvSample::word_from_le([0x00, 0xFF]), 0xFF00);
    }

    #[test]
    fn light_count_puts_high_byte_first() {
        assert_eq!(RawLightSample::from_bytes(0x01, 0x00).count, 256);
        assert_eq!(RawLightSample::from_bytes(0x00, 0x01).count, 1);
        assert_eq!(RawLightSample::from_bytes(0xFF, 0xFF).count, u16::MAX);
        assert_eq!(RawLightSample::from_bytes(0x12, 0x34).count, 0x1234);
    }
}
