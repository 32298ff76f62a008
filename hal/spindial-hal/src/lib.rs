//! Spindial Hardware Abstraction Layer
//!
//! This crate defines the minimal hardware capabilities the display driver
//! and the render loop need, so that protocol and game logic can be tested
//! on the host without a panel attached.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Render loop (spindial-display)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Controller driver (spindial-st7789)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  spindial-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 implementations       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::DisplayBus`] - Burst transport with select lines and delay
//! - [`gpio::InputPin`] - Digital input (the game button)
//!
//! The [`ehal`] module adapts any `embedded-hal` 1.0 SPI bus, pins and delay
//! to these traits.

#![no_std]
#![deny(unsafe_code)]

pub mod ehal;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use ehal::{EhalInput, NoPin, SpiDisplayBus};
pub use gpio::InputPin;
pub use spi::{BusPin, DisplayBus, BURST_LEN};
