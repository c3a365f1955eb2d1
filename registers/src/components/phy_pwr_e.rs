//! Field Enum: PHY_PWR

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhyPwrE {
    /// PHY powered off
    Off = 0,
    /// PHY LDO regulator on, transmitter off
    LdoOn = 1,
    /// PHY LDO and transmitter on
    TxOn = 2,
}

impl PhyPwrE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Off),
            1 => Ok(Self::LdoOn),
            2 => Ok(Self::TxOn),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
