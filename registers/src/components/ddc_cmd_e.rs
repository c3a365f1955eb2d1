//! Field Enum: DDC_CMD

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdcCmdE {
    /// Sequential read of COUNT bytes from OFFSET
    SequentialRead = 2,
    /// Enhanced DDC read using SEGM
    EnhancedDdcRead = 4,
    /// Clear the receive FIFO
    ClearFifo = 9,
    /// Clock SCL to release downstream devices
    ClockScl = 0xA,
    /// Abort the current transaction
    Abort = 0xF,
}

impl DdcCmdE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            2 => Ok(Self::SequentialRead),
            4 => Ok(Self::EnhancedDdcRead),
            9 => Ok(Self::ClearFifo),
            0xA => Ok(Self::ClockScl),
            0xF => Ok(Self::Abort),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
