//! Field Enum: TIMING_MODE

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingModeE {
    /// Timing slave
    Slave = 0,
    /// Timing master, 24-bit bus
    Master24Bit = 1,
    /// Timing master, 30-bit bus
    Master30Bit = 2,
    /// Timing master, 36-bit bus
    Master36Bit = 3,
}

impl TimingModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Slave),
            1 => Ok(Self::Master24Bit),
            2 => Ok(Self::Master30Bit),
            3 => Ok(Self::Master36Bit),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
