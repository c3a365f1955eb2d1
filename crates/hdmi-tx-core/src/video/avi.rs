//! CEA-861 AVI info frame.

use hdmi_registers::encode::FieldOverflow;

pub const AVI_TYPE: u8 = 0x82;
pub const AVI_VERSION: u8 = 0x02;
pub const AVI_LENGTH: u8 = 0x0D;

/// DB2 R3..R0: active format aspect ratio same as the picture.
pub const ACTIVE_FORMAT_SAME: u8 = 0x8;

/// DB1 Y1..Y0
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AviColorFormat {
    #[default]
    Rgb = 0,
    Yuv422 = 1,
    Yuv444 = 2,
}

/// AVI payload. Defaults describe an RGB picture with no bars, no
/// scan information and the active format matching the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AviInfoFrame {
    pub db1_format: AviColorFormat,
    pub db1_active_info: bool,
    /// B1..B0, 2 bits
    pub db1_bar_info: u8,
    /// S1..S0, 2 bits
    pub db1_scan_info: u8,
    /// C1..C0, 2 bits
    pub db2_colorimetry: u8,
    /// M1..M0, 2 bits
    pub db2_aspect_ratio: u8,
    /// R3..R0, 4 bits
    pub db2_active_fmt_ar: u8,
    pub db3_itc: bool,
    /// EC2..EC0, 3 bits
    pub db3_ec: u8,
    /// Q1..Q0, 2 bits
    pub db3_q_range: u8,
    /// SC1..SC0, 2 bits
    pub db3_nup_scaling: u8,
    /// VIC, full byte
    pub db4_video_code: u8,
    /// PR3..PR0, 4 bits
    pub db5_pixel_repeat: u8,
    pub db6_7_line_eoftop: u16,
    pub db8_9_line_sofbottom: u16,
    pub db10_11_pixel_eofleft: u16,
    pub db12_13_pixel_sofright: u16,
}

impl Default for AviInfoFrame {
    fn default() -> Self {
        Self {
            db1_format: AviColorFormat::Rgb,
            db1_active_info: false,
            db1_bar_info: 0,
            db1_scan_info: 0,
            db2_colorimetry: 0,
            db2_aspect_ratio: 0,
            db2_active_fmt_ar: ACTIVE_FORMAT_SAME,
            db3_itc: false,
            db3_ec: 0,
            db3_q_range: 0,
            db3_nup_scaling: 0,
            db4_video_code: 0,
            db5_pixel_repeat: 0,
            db6_7_line_eoftop: 0,
            db8_9_line_sofbottom: 0,
            db10_11_pixel_eofleft: 0,
            db12_13_pixel_sofright: 0,
        }
    }
}

fn bits(field: &'static str, value: u8, width: u8) -> Result<u8, FieldOverflow> {
    if u32::from(value) >> width != 0 {
        return Err(FieldOverflow {
            field,
            value: u32::from(value),
            width,
        });
    }
    Ok(value)
}

impl AviInfoFrame {
    pub fn new(video_code: u8) -> Self {
        Self {
            db4_video_code: video_code,
            ..Self::default()
        }
    }

    /// Packed data bytes DB1..DB13.
    pub fn data_bytes(&self) -> Result<[u8; AVI_LENGTH as usize], FieldOverflow> {
        let db1 = (self.db1_format as u8) << 5
            | u8::from(self.db1_active_info) << 4
            | bits("DB1_BAR_INFO", self.db1_bar_info, 2)? << 2
            | bits("DB1_SCAN_INFO", self.db1_scan_info, 2)?;
        let db2 = bits("DB2_COLORIMETRY", self.db2_colorimetry, 2)? << 6
            | bits("DB2_ASPECT_RATIO", self.db2_aspect_ratio, 2)? << 4
            | bits("DB2_ACTIVE_FMT_AR", self.db2_active_fmt_ar, 4)?;
        let db3 = u8::from(self.db3_itc) << 7
            | bits("DB3_EC", self.db3_ec, 3)? << 4
            | bits("DB3_Q_RANGE", self.db3_q_range, 2)? << 2
            | bits("DB3_NUP_SCALING", self.db3_nup_scaling, 2)?;
        let db4 = self.db4_video_code;
        let db5 = bits("DB5_PIXEL_REPEAT", self.db5_pixel_repeat, 4)?;
        let [top_lo, top_hi] = self.db6_7_line_eoftop.to_le_bytes();
        let [bottom_lo, bottom_hi] = self.db8_9_line_sofbottom.to_le_bytes();
        let [left_lo, left_hi] = self.db10_11_pixel_eofleft.to_le_bytes();
        let [right_lo, right_hi] = self.db12_13_pixel_sofright.to_le_bytes();
        Ok([
            db1, db2, db3, db4, db5, top_lo, top_hi, bottom_lo, bottom_hi, left_lo, left_hi,
            right_lo, right_hi,
        ])
    }

    /// Value making header plus payload sum to zero modulo 256.
    pub fn checksum(data: &[u8]) -> u8 {
        let sum = data
            .iter()
            .fold(AVI_TYPE.wrapping_add(AVI_VERSION).wrapping_add(AVI_LENGTH), |acc, b| {
                acc.wrapping_add(*b)
            });
        0u8.wrapping_sub(sum)
    }
}
