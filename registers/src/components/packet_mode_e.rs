//! Field Enum: PACKET_MODE

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketModeE {
    /// Reserved / no deep-color packing
    Reserved = 0,
    /// 24 bits per pixel
    Bpp24 = 4,
    /// 30 bits per pixel
    Bpp30 = 5,
    /// 36 bits per pixel
    Bpp36 = 6,
    /// 48 bits per pixel
    Bpp48 = 7,
}

impl PacketModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Reserved),
            4 => Ok(Self::Bpp24),
            5 => Ok(Self::Bpp30),
            6 => Ok(Self::Bpp36),
            7 => Ok(Self::Bpp48),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
