//! Board-agnostic game logic for the Spindial dial game
//!
//! This crate contains everything about the game that does not touch
//! hardware:
//!
//! - Discrete angle model and needle geometry tables
//! - Bounded needle storage with collision checks
//! - PLAY/FLASH state machine
//! - Per-frame engine step
//!
//! The engine is a pure state update. Drawing is done by the render loop
//! from the [`Frame`] each step returns.

#![no_std]
#![deny(unsafe_code)]

pub mod angle;
pub mod config;
pub mod engine;
pub mod needles;
pub mod state;

pub use angle::{wrap, wrap_diff, SpinIndex, ANGLE_STEPS, TOP_SLOT};
pub use config::EngineConfig;
pub use engine::{Engine, Frame, Placement};
pub use needles::{NeedleSet, PlacementError, COLLISION_STEPS, MAX_NEEDLES};
pub use state::{Event, GameState, FLASH_TOGGLES};
