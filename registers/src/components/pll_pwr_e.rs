//! Field Enum: PLL_PWR

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PllPwrE {
    /// PLL and its output clocks powered off
    AllOff = 0,
    /// PLL on, output clocks gated
    PllOnly = 1,
    /// PLL and all output clocks on
    BothOnAllClocks = 2,
    /// PLL and clocks on except the PHY clock
    BothOnNoPhyClock = 3,
}

impl PllPwrE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::AllOff),
            1 => Ok(Self::PllOnly),
            2 => Ok(Self::BothOnAllClocks),
            3 => Ok(Self::BothOnNoPhyClock),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
