//! Register: VIDEO_SIZE

use crate::reg::{Block, Field};

/// VIDEO_SIZE
///
/// Active resolution
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct VideoSizeReg(u32);

unsafe impl Send for VideoSizeReg {}
unsafe impl Sync for VideoSizeReg {}

impl core::default::Default for VideoSizeReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for VideoSizeReg {
    const BLOCK: Block = Block::Wrapper;
    const ADDRESS: u16 = 0x60;
    const NAME: &'static str = "HDMI_WP_VIDEO_SIZE";
    const FIELDS: &'static [Field] = &[Self::X_RES, Self::Y_RES];

    fn from_raw(val: u32) -> Self {
        Self(val)
    }

    fn to_raw(self) -> u32 {
        self.0
    }
}

impl VideoSizeReg {
    pub const X_RES_OFFSET: usize = 0;
    pub const X_RES_WIDTH: usize = 16;
    pub const X_RES_MASK: u32 = 0xFFFF;
    pub const X_RES: Field = Field::new("X_RES", Block::Wrapper, 0x60, 15, 0);

    /// Active pixels per line
    #[inline(always)]
    #[must_use]
    pub fn x_res(&self) -> u16 {
        let val = (self.0 >> Self::X_RES_OFFSET) & Self::X_RES_MASK;
        val as u16
    }

    /// Active pixels per line
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 16 bits.
    #[inline(always)]
    pub fn set_x_res(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::X_RES.insert(self.0, val as u32)?;
        Ok(())
    }

    pub const Y_RES_OFFSET: usize = 16;
    pub const Y_RES_WIDTH: usize = 16;
    pub const Y_RES_MASK: u32 = 0xFFFF;
    pub const Y_RES: Field = Field::new("Y_RES", Block::Wrapper, 0x60, 31, 16);

    /// Active lines per frame
    #[inline(always)]
    #[must_use]
    pub fn y_res(&self) -> u16 {
        let val = (self.0 >> Self::Y_RES_OFFSET) & Self::Y_RES_MASK;
        val as u16
    }

    /// Active lines per frame
    ///
    /// # Errors
    /// Returns an error if `val` does not fit in 16 bits.
    #[inline(always)]
    pub fn set_y_res(&mut self, val: u16) -> Result<(), crate::encode::FieldOverflow> {
        self.0 = Self::Y_RES.insert(self.0, val as u32)?;
        Ok(())
    }
}

impl core::fmt::Debug for VideoSizeReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VideoSizeReg")
            .field("x_res", &self.x_res())
            .field("y_res", &self.y_res())
            .finish()
    }
}
