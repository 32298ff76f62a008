//! Dial scene and frame loop for Spindial
//!
//! This crate provides:
//! - `Dial`, the per-frame orchestrator: sample the button, step the
//!   engine, erase and redraw needles, repaint the score, pace the frame
//! - Scene drawing for the static dial, needles and score
//! - `DialConfig` with the layout and colors
//!
//! # Architecture
//!
//! Everything draws through an `embedded-graphics` `DrawTarget<Color = Rgb565>`.
//! There is no framebuffer: the previous frame's needles are erased by
//! drawing them again in the background color, so erase and draw must use
//! exactly the same geometry and run in that order.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod dial;
pub mod scene;

// Re-export key types
pub use config::DialConfig;
pub use dial::Dial;
