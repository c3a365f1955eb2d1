//! Field Enum: TCLK_SEL

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TclkSelE {
    /// TMDS clock = 0.5x IDCK
    Fpll05Idck = 0,
    /// TMDS clock = 1.0x IDCK
    Fpll10Idck = 1,
    /// TMDS clock = 2.0x IDCK
    Fpll20Idck = 2,
    /// TMDS clock = 4.0x IDCK
    Fpll40Idck = 3,
}

impl TclkSelE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Fpll05Idck),
            1 => Ok(Self::Fpll10Idck),
            2 => Ok(Self::Fpll20Idck),
            3 => Ok(Self::Fpll40Idck),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
