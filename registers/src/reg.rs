//! Register, field and block descriptors shared by every component.

use crate::encode::FieldOverflow;

/// The five register blocks of one transmitter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Wrapper: power control, video timing, output enable
    Wrapper,
    /// PLL controller
    Pll,
    /// Transmitter PHY
    Phy,
    /// Core system: reset, input video path, DDC master
    CoreSys,
    /// Core audio/video: HDMI control, packets, info frames
    CoreAv,
}

impl Block {
    pub const ALL: [Block; 5] = [
        Block::Wrapper,
        Block::Pll,
        Block::Phy,
        Block::CoreSys,
        Block::CoreAv,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Block::Wrapper => "wrapper",
            Block::Pll => "pll",
            Block::Phy => "phy",
            Block::CoreSys => "core_sys",
            Block::CoreAv => "core_av",
        }
    }
}

/// A 32-bit register at a fixed offset inside one block.
pub trait Register: Copy {
    const BLOCK: Block;
    /// Byte offset from the start of [`Self::BLOCK`]
    const ADDRESS: u16;
    /// Silicon name, as used in diagnostic dumps
    const NAME: &'static str;
    /// Every documented field, ordered by bit position
    const FIELDS: &'static [Field];

    fn from_raw(val: u32) -> Self;

    fn to_raw(self) -> u32;
}

/// A register replicated at a fixed stride (e.g. info frame data bytes).
pub trait RegisterArray: Register {
    const COUNT: usize;
    const STRIDE: u16;

    /// Offset of element `index`, or `None` past the end of the array.
    #[must_use]
    fn address_of(index: usize) -> Option<u16> {
        if index < Self::COUNT {
            Some(Self::ADDRESS + Self::STRIDE * index as u16)
        } else {
            None
        }
    }
}

/// An inclusive bit range `[msb:lsb]` of one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub block: Block,
    pub address: u16,
    pub msb: u8,
    pub lsb: u8,
}

impl Field {
    /// # Panics
    /// At compile time if the range is inverted or leaves the 32-bit word.
    #[must_use]
    pub const fn new(name: &'static str, block: Block, address: u16, msb: u8, lsb: u8) -> Self {
        assert!(msb >= lsb, "field msb below lsb");
        assert!(msb < 32, "field outside the 32-bit register");
        Self {
            name,
            block,
            address,
            msb,
            lsb,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.msb - self.lsb + 1
    }

    /// Right-aligned mask of the field width.
    #[must_use]
    pub const fn mask(&self) -> u32 {
        if self.width() == 32 {
            u32::MAX
        } else {
            (1 << self.width()) - 1
        }
    }

    #[must_use]
    pub const fn is_full_word(&self) -> bool {
        self.width() == 32
    }

    /// Extract this field from a whole register word.
    #[must_use]
    pub const fn extract(&self, word: u32) -> u32 {
        (word >> self.lsb) & self.mask()
    }

    /// Replace this field inside `word`, leaving every other bit untouched.
    ///
    /// # Errors
    /// Returns [`FieldOverflow`] if `value` is wider than the field.
    pub const fn insert(&self, word: u32, value: u32) -> Result<u32, FieldOverflow> {
        if value & !self.mask() != 0 {
            return Err(FieldOverflow {
                field: self.name,
                value,
                width: self.width(),
            });
        }
        Ok((word & !(self.mask() << self.lsb)) | (value << self.lsb))
    }

    /// True if both fields live in the same register and share a bit.
    #[must_use]
    pub const fn overlaps(&self, other: &Field) -> bool {
        let same_block = self.block as u8 == other.block as u8;
        same_block
            && self.address == other.address
            && self.lsb <= other.msb
            && other.lsb <= self.msb
    }
}

/// A documented register address, used for diagnostic dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterInfo {
    pub name: &'static str,
    pub block: Block,
    pub address: u16,
}

impl RegisterInfo {
    #[must_use]
    pub const fn new(name: &'static str, block: Block, address: u16) -> Self {
        Self {
            name,
            block,
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Field = Field::new("WIDE", Block::Pll, 0x20, 17, 0);
    const FULL: Field = Field::new("FULL", Block::Phy, 0x04, 31, 0);

    #[test]
    fn test_insert_preserves_neighbours() {
        let word = 0xFFFF_FFFF;
        let updated = WIDE.insert(word, 0x1234).unwrap();
        assert_eq!(updated, 0xFFFC_1234);
        assert_eq!(WIDE.extract(updated), 0x1234);
    }

    #[test]
    fn test_insert_rejects_wide_value() {
        let err = WIDE.insert(0, 0x4_0000).unwrap_err();
        assert_eq!(err.width, 18);
        assert_eq!(err.value, 0x4_0000);
    }

    #[test]
    fn test_full_word() {
        assert!(FULL.is_full_word());
        assert_eq!(FULL.mask(), u32::MAX);
        assert_eq!(FULL.insert(0x1234, 0xF000_0000), Ok(0xF000_0000));
    }

    #[test]
    fn test_overlap() {
        let a = Field::new("A", Block::Wrapper, 0x40, 3, 2);
        let b = Field::new("B", Block::Wrapper, 0x40, 2, 0);
        let c = Field::new("C", Block::Wrapper, 0x40, 7, 4);
        let d = Field::new("D", Block::CoreSys, 0x40, 3, 2);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }
}
