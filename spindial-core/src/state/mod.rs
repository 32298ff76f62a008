//! Game state machine
//!
//! The state machine is explicit, finite, and deterministic. It cycles
//! between PLAY and FLASH for as long as the device runs.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{GameState, FLASH_TOGGLES};
