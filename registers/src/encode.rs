//! Errors produced when converting between raw bits and typed field values.

/// A raw bit pattern that does not correspond to any variant of a field enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant<T>(T);

impl<T: Copy> UnknownVariant<T> {
    #[must_use]
    pub const fn new(bits: T) -> Self {
        Self(bits)
    }

    /// The bit pattern that failed to decode
    #[must_use]
    pub const fn bits(&self) -> T {
        self.0
    }
}

impl<T: core::fmt::LowerHex> core::fmt::Display for UnknownVariant<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown field encoding {:#x}", self.0)
    }
}

/// A value too wide for the field it was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverflow {
    /// Field name
    pub field: &'static str,
    /// Rejected value
    pub value: u32,
    /// Field width in bits
    pub width: u8,
}

impl core::fmt::Display for FieldOverflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "value {:#x} does not fit in {}-bit field {}",
            self.value, self.width, self.field
        )
    }
}

impl core::error::Error for FieldOverflow {}
