//! Field Enum: DCO_FREQSEL

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DcoFreqselE {
    /// DCO range 500 MHz to 1000 MHz
    Dco500To1000Mhz = 2,
    /// DCO range 1000 MHz to 2000 MHz, sigma-delta divider in use
    Dco1000To2000Mhz = 4,
}

impl DcoFreqselE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            2 => Ok(Self::Dco500To1000Mhz),
            4 => Ok(Self::Dco1000To2000Mhz),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
