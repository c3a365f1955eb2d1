//! Field Enum: PACKING_MODE

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingModeE {
    /// 10-bit RGB or YUV444
    Rgb10bYuv444 = 0,
    /// 24-bit RGB, YUV444 or YUV422
    Rgb24bYuv444Yuv422 = 1,
    /// 20-bit YUV422
    Yuv422_20b = 2,
    /// Input already packed
    AlreadyPacked = 7,
}

impl PackingModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Rgb10bYuv444),
            1 => Ok(Self::Rgb24bYuv444Yuv422),
            2 => Ok(Self::Yuv422_20b),
            7 => Ok(Self::AlreadyPacked),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
