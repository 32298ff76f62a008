//! RGB565 packing helpers

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};

/// Pack 8-bit channels into RGB565, dropping the low bits of each
pub fn color565(r: u8, g: u8, b: u8) -> Rgb565 {
    let raw = ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3);
    Rgb565::from(RawU16::new(raw))
}

/// 16-bit value sent on the wire for a color
pub fn to_raw(color: Rgb565) -> u16 {
    color.into_storage()
}
