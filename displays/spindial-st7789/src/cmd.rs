//! ST77xx command set

pub const NOP: u8 = 0x00;
pub const SWRESET: u8 = 0x01;
pub const RDDID: u8 = 0x04;
pub const RDDST: u8 = 0x09;

pub const SLPIN: u8 = 0x10;
pub const SLPOUT: u8 = 0x11;
pub const PTLON: u8 = 0x12;
pub const NORON: u8 = 0x13;

pub const INVOFF: u8 = 0x20;
pub const INVON: u8 = 0x21;
pub const DISPOFF: u8 = 0x28;
pub const DISPON: u8 = 0x29;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Row address set
pub const RASET: u8 = 0x2B;
/// Memory write; following data bytes are pixels
pub const RAMWR: u8 = 0x2C;
pub const RAMRD: u8 = 0x2E;

/// Interface pixel format
pub const COLMOD: u8 = 0x3A;
/// Memory data access control
pub const MADCTL: u8 = 0x36;

/// COLMOD operand for 16 bits per pixel
pub const COLMOD_16BIT: u8 = 0x55;

/// MADCTL bit flags
pub mod madctl {
    /// Row address order
    pub const MY: u8 = 0x80;
    /// Column address order
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// Vertical refresh order
    pub const ML: u8 = 0x10;
    pub const RGB: u8 = 0x08;
    pub const BGR: u8 = 0x00;
}
