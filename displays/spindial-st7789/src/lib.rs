//! ST7789 display controller driver
//!
//! Turns pixel operations into the controller's command/data stream over a
//! [`DisplayBus`](spindial_hal::DisplayBus):
//!
//! - Panel geometry offsets and rotation-dependent address translation
//! - Address window setup and RAM write priming
//! - Pixel streaming in bounded bursts, each completed before the next
//! - `embedded-graphics` [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//!   so shapes and text can be layered on top
//!
//! There is no framebuffer: every pixel write goes straight to the panel.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cmd;
pub mod color;
pub mod driver;
pub mod geometry;
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::{color565, to_raw};
pub use driver::{PanelConfig, St7789};
pub use geometry::{PanelGeometry, PanelOffsets, Rotation, CONTROLLER_COLUMNS, CONTROLLER_ROWS};
