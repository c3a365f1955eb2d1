//! Synthetic EDID images for the simulated sink.
//!
//! Only the parts a sink needs to be recognisable are filled in: the fixed
//! header, vendor and product identity, version 1.3, one detailed timing
//! descriptor, a product name descriptor and the extension count. Extension
//! blocks are empty CEA-861 blocks. Every block carries a valid checksum.

use hdmi_tx_core::DisplayTiming;
use hdmi_tx_core::edid::{EDID_BLOCK_SIZE, EDID_EXTENSION_COUNT, block_checksum};

const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
const DESCRIPTOR_LEN: usize = 18;
const FIRST_DESCRIPTOR: usize = 0x36;
const NAME_TAG: u8 = 0xFC;
const CEA_EXTENSION_TAG: u8 = 0x02;
const CEA_REVISION: u8 = 0x03;

#[derive(Debug, Clone)]
pub struct EdidBuilder {
    manufacturer: [u8; 3],
    product: u16,
    serial: u32,
    name: String,
    preferred: DisplayTiming,
    extensions: u8,
}

impl Default for EdidBuilder {
    fn default() -> Self {
        Self {
            manufacturer: *b"SIM",
            product: 0x0001,
            serial: 1,
            name: String::from("HDMI SINK"),
            preferred: DisplayTiming::VESA_800X600_60,
            extensions: 1,
        }
    }
}

impl EdidBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Three upper-case letters; anything else is folded into the 5-bit
    /// alphabet the EDID vendor field uses.
    pub fn manufacturer(mut self, id: [u8; 3]) -> Self {
        self.manufacturer = id;
        self
    }

    pub fn product(mut self, product: u16) -> Self {
        self.product = product;
        self
    }

    pub fn serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    /// Product name, truncated to the 13 bytes a descriptor holds.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    pub fn preferred(mut self, timing: DisplayTiming) -> Self {
        self.preferred = timing;
        self
    }

    pub fn extensions(mut self, count: u8) -> Self {
        self.extensions = count;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let blocks = usize::from(self.extensions) + 1;
        let mut image = vec![0u8; EDID_BLOCK_SIZE * blocks];

        let (base, rest) = image.split_at_mut(EDID_BLOCK_SIZE);
        self.populate_base(base);
        for (n, block) in rest.chunks_exact_mut(EDID_BLOCK_SIZE).enumerate() {
            block[0] = CEA_EXTENSION_TAG;
            block[1] = CEA_REVISION;
            // No data blocks: detailed timings would start right after the header.
            block[2] = 4;
            // Native DTD count, varied so the blocks differ from each other.
            block[3] = (n as u8) & 0x0F;
            seal(block);
        }
        image
    }

    fn populate_base(&self, block: &mut [u8]) {
        block[..HEADER.len()].copy_from_slice(&HEADER);

        let vendor = self
            .manufacturer
            .iter()
            .map(|c| u16::from(c.wrapping_sub(b'A').wrapping_add(1) & 0x1F))
            .fold(0u16, |id, letter| (id << 5) | letter);
        block[8..10].copy_from_slice(&vendor.to_be_bytes());
        block[10..12].copy_from_slice(&self.product.to_le_bytes());
        block[12..16].copy_from_slice(&self.serial.to_le_bytes());
        // Week 1 of 2024
        block[16] = 1;
        block[17] = 34;
        block[18] = 1;
        block[19] = 3;
        // Digital input
        block[20] = 0x80;

        let first = FIRST_DESCRIPTOR;
        detailed_timing(&mut block[first..first + DESCRIPTOR_LEN], &self.preferred);
        let second = first + DESCRIPTOR_LEN;
        name_descriptor(&mut block[second..second + DESCRIPTOR_LEN], &self.name);

        block[EDID_EXTENSION_COUNT] = self.extensions;
        seal(block);
    }
}

fn detailed_timing(d: &mut [u8], t: &DisplayTiming) {
    let hblank = t.left_margin + t.right_margin + t.hsync_len;
    let vblank = t.upper_margin + t.lower_margin + t.vsync_len;

    let clock = (t.pixel_clock_khz / 10) as u16;
    d[0..2].copy_from_slice(&clock.to_le_bytes());
    d[2] = t.xres as u8;
    d[3] = hblank as u8;
    d[4] = ((t.xres >> 8) as u8 & 0x0F) << 4 | ((hblank >> 8) as u8 & 0x0F);
    d[5] = t.yres as u8;
    d[6] = vblank as u8;
    d[7] = ((t.yres >> 8) as u8 & 0x0F) << 4 | ((vblank >> 8) as u8 & 0x0F);
    d[8] = t.right_margin as u8;
    d[9] = t.hsync_len as u8;
    d[10] = (t.lower_margin as u8 & 0x0F) << 4 | (t.vsync_len as u8 & 0x0F);
    d[11] = ((t.right_margin >> 8) as u8 & 0x3) << 6
        | ((t.hsync_len >> 8) as u8 & 0x3) << 4
        | ((t.lower_margin >> 4) as u8 & 0x3) << 2
        | ((t.vsync_len >> 4) as u8 & 0x3);

    // Digital separate sync
    let mut flags = 0x18;
    if t.vsync_high {
        flags |= 0x04;
    }
    if t.hsync_high {
        flags |= 0x02;
    }
    if t.interlaced {
        flags |= 0x80;
    }
    d[17] = flags;
}

fn name_descriptor(d: &mut [u8], name: &str) {
    d[3] = NAME_TAG;
    let text = &mut d[5..];
    text.fill(b' ');
    let bytes = name.as_bytes();
    let len = bytes.len().min(text.len());
    text[..len].copy_from_slice(&bytes[..len]);
    if len < text.len() {
        text[len] = b'\n';
    }
}

fn seal(block: &mut [u8]) {
    let last = EDID_BLOCK_SIZE - 1;
    block[last] = 0;
    block[last] = 0u8.wrapping_sub(block_checksum(block));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_sums_to_zero() {
        let image = EdidBuilder::new().extensions(3).build();
        assert_eq!(image.len(), 4 * EDID_BLOCK_SIZE);
        for block in image.chunks(EDID_BLOCK_SIZE) {
            assert_eq!(block_checksum(block), 0);
        }
        assert_eq!(image[EDID_EXTENSION_COUNT], 3);
    }

    #[test]
    fn base_block_identity() {
        let image = EdidBuilder::new().manufacturer(*b"TIX").product(0x4430).build();
        assert_eq!(&image[..8], &HEADER);
        // 'T'=20, 'I'=9, 'X'=24
        assert_eq!(u16::from_be_bytes([image[8], image[9]]), (20 << 10) | (9 << 5) | 24);
        assert_eq!(u16::from_le_bytes([image[10], image[11]]), 0x4430);
        assert_eq!(image[0x80], CEA_EXTENSION_TAG);
    }

    #[test]
    fn preferred_timing_descriptor() {
        let image = EdidBuilder::new()
            .preferred(DisplayTiming::CEA_1280X720_60)
            .extensions(0)
            .build();
        let d = &image[FIRST_DESCRIPTOR..FIRST_DESCRIPTOR + DESCRIPTOR_LEN];
        assert_eq!(u16::from_le_bytes([d[0], d[1]]), 7425);
        assert_eq!(u16::from(d[2]) | u16::from(d[4] >> 4) << 8, 1280);
        assert_eq!(u16::from(d[5]) | u16::from(d[7] >> 4) << 8, 720);
        assert_eq!(d[17] & 0x06, 0x06);
    }

    #[test]
    fn long_name_is_truncated() {
        let image = EdidBuilder::new().name("A VERY LONG MONITOR NAME").build();
        let d = &image[FIRST_DESCRIPTOR + DESCRIPTOR_LEN..];
        assert_eq!(d[3], NAME_TAG);
        assert_eq!(&d[5..18], b"A VERY LONG M");
    }
}
