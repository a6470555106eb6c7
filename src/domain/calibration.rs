//! Calibration domain services
//!
//! Converts raw ADC counts into physical units. Coefficients are fixed
//! datasheet values; there is no per-unit calibration.

use super::sample::{RawLightSample, RawUvSample};

/// VEML6075 UV compensation coefficients
///
/// The UVA and UVB channels also respond to visible and IR light. The two
/// compensation channels (UVCOMP1 visible, UVCOMP2 IR) are scaled and
/// removed from each UV channel, then the compensated intensities are
/// weighted by the channel responsivity to get the UV index.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UvCompensation {
    /// UVA visible coefficient (a)
    pub uva_visible: f32,
    /// UVA IR coefficient (b)
    pub uva_ir: f32,
    /// UVB visible coefficient (c)
    pub uvb_visible: f32,
    /// UVB IR coefficient (d)
    pub uvb_ir: f32,
    /// UVA responsivity, counts to index contribution
    pub uva_response: f32,
    /// UVB responsivity, counts to index contribution
    pub uvb_response: f32,
}

impl UvCompensation {
    /// Open air coefficients (no teflon diffuser)
    ///
    /// From the VEML6075 application note 84339, page 15.
    pub const OPEN_AIR: Self = Self {
        uva_visible: 2.22,
        uva_ir: 1.33,
        uvb_visible: 2.95,
        uvb_ir: 1.74,
        uva_response: 1.0 / 684.46,
        uvb_response: 1.0 / 385.95,
    };

    /// Compensated UVA intensity
    ///
    /// `uva - (a * comp1 - b * comp2)`. The IR term is added back, not
    /// subtracted; this matches the board's reference calibration.
    #[inline]
    pub fn uva(&self, raw: &RawUvSample) -> f32 {
        let comp1 = raw.visible_comp as f32;
        let comp2 = raw.ir_comp as f32;
        raw.uva as f32 - (self.uva_visible * comp1 - self.uva_ir * comp2)
    }

    /// Compensated UVB intensity, `uvb - (c * comp1 - d * comp2)`
    #[inline]
    pub fn uvb(&self, raw: &RawUvSample) -> f32 {
        let comp1 = raw.visible_comp as f32;
        let comp2 = raw.ir_comp as f32;
        raw.uvb as f32 - (self.uvb_visible * comp1 - self.uvb_ir * comp2)
    }

    /// UV index from compensated intensities
    ///
    /// Mean of the two responsivity-weighted channels. Negative intensities
    /// are passed through unclamped.
    #[inline]
    pub fn uv_index(&self, uva: f32, uvb: f32) -> f32 {
        let uva_comp = uva * self.uva_response;
        let uvb_comp = uvb * self.uvb_response;
        (uva_comp + uvb_comp) / 2.0
    }
}

impl Default for UvCompensation {
    fn default() -> Self {
        Self::OPEN_AIR
    }
}

/// TSL4531 lux calibration
///
/// `lux = multiplier * count`. The multiplier is a datasheet lookup keyed on
/// the integration time; changing integration time without changing the
/// multiplier gives wrong lux.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LuxCalibration {
    /// Counts to lux factor
    pub multiplier: f32,
}

impl LuxCalibration {
    /// 100ms integration (TCNTRL = 10)
    pub const IT_100MS: Self = Self { multiplier: 4.0 };

    /// 200ms integration (TCNTRL = 01)
    pub const IT_200MS: Self = Self { multiplier: 2.0 };

    /// 400ms integration (TCNTRL = 00)
    pub const IT_400MS: Self = Self { multiplier: 1.0 };

    /// Convert a raw count to lux
    #[inline]
    pub fn lux(&self, raw: &RawLightSample) -> f32 {
        self.multiplier * raw.count as f32
    }
}

impl Default for LuxCalibration {
    fn default() -> Self {
        Self::IT_100MS
    }
}
