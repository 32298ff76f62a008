//! State machine definition

use super::events::Event;

/// Number of background toggles a FLASH lasts
pub const FLASH_TOGGLES: u8 = 6;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Dial spinning, button places needles
    Play,
    /// Failed placement feedback; the background blinks
    Flash {
        /// Toggles performed so far
        toggles: u8,
        /// Whether the last toggle lit the background
        lit: bool,
    },
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Play
    }
}

impl GameState {
    /// Check if the button is live in this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, GameState::Play)
    }

    /// Check if this is a FLASH state
    pub fn is_flashing(&self) -> bool {
        matches!(self, GameState::Flash { .. })
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use GameState::*;

        match (self, event) {
            (Play, Event::Rejected(_)) => Flash {
                toggles: 0,
                lit: false,
            },

            (Flash { toggles, lit }, Event::Tick) => {
                let toggles = toggles + 1;
                if toggles >= FLASH_TOGGLES {
                    Play
                } else {
                    Flash { toggles, lit: !lit }
                }
            }

            // Default: stay in current state
            _ => self,
        }
    }
}
