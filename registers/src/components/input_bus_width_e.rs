//! Field Enum: INPUT_BUS_WIDTH

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBusWidthE {
    /// 8 bits per component
    Bits8 = 0,
    /// 10 bits per component
    Bits10 = 1,
    /// 12 bits per component
    Bits12 = 2,
}

impl InputBusWidthE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Bits8),
            1 => Ok(Self::Bits10),
            2 => Ok(Self::Bits12),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
