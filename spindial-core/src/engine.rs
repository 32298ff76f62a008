//! Per-frame needle engine
//!
//! The engine owns all game state and is advanced exactly once per frame
//! with the sampled button level. Each step returns a [`Frame`] telling
//! the render loop what changed, so the previous picture can be erased by
//! replaying its geometry instead of keeping a framebuffer.
//!
//! ```ignore
//! let mut engine = Engine::new(EngineConfig::default());
//!
//! // Once per frame:
//! match engine.step(button.is_high()) {
//!     Frame::Play { previous_spin, spin, .. } => { /* erase, then draw */ }
//!     Frame::Flash { lit, finished } => { /* blink background */ }
//! }
//! ```

use crate::angle::{wrap, SpinIndex, TOP_SLOT};
use crate::config::EngineConfig;
use crate::needles::{NeedleSet, PlacementError, MAX_NEEDLES};
use crate::state::{Event, GameState};

/// Result of a button press in PLAY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Placement {
    /// Needle stored at this unspun slot
    Placed(u8),
    /// Needle refused; the engine entered FLASH
    Rejected(PlacementError),
}

/// What one engine step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Frame stepped in PLAY
    Play {
        /// Spin the needles were last drawn with
        previous_spin: SpinIndex,
        /// Spin to draw the needles with now
        spin: SpinIndex,
        /// Outcome of a button press this frame, if any
        placement: Option<Placement>,
    },
    /// Frame stepped in FLASH
    Flash {
        /// Background lit (true) or back to normal (false)
        lit: bool,
        /// FLASH completed and the engine was reset to PLAY
        finished: bool,
    },
}

/// Angular needle engine
pub struct Engine<const N: usize = MAX_NEEDLES> {
    config: EngineConfig,
    needles: NeedleSet<N>,
    spin: SpinIndex,
    state: GameState,
    /// Button level seen on the previous PLAY frame
    last_button: bool,
}

impl Engine {
    /// Create an engine with the standard needle capacity
    pub const fn new(config: EngineConfig) -> Self {
        Self::bounded(config)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<const N: usize> Engine<N> {
    /// Create an engine holding at most `N` needles
    pub const fn bounded(config: EngineConfig) -> Self {
        Self {
            config,
            needles: NeedleSet::new(),
            spin: SpinIndex::ZERO,
            state: GameState::Play,
            last_button: false,
        }
    }

    /// Get the current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Get the stored needles
    pub fn needles(&self) -> &NeedleSet<N> {
        &self.needles
    }

    /// Get the current spin index
    pub fn spin(&self) -> SpinIndex {
        self.spin
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Advance one frame with the button level sampled for it
    pub fn step(&mut self, button_high: bool) -> Frame {
        let previous_spin = self.spin;

        match self.state {
            GameState::Play => {
                let pressed = button_high && !self.last_button;
                self.last_button = button_high;

                let placement = if pressed { Some(self.place()) } else { None };

                self.spin.advance(self.config.spin_steps);
                Frame::Play {
                    previous_spin,
                    spin: self.spin,
                    placement,
                }
            }
            GameState::Flash { lit, .. } => {
                self.spin.advance(self.config.spin_steps);
                self.state = self.state.transition(Event::Tick);

                let finished = !self.state.is_flashing();
                if finished {
                    self.reset();
                }
                Frame::Flash {
                    lit: !lit,
                    finished,
                }
            }
        }
    }

    /// Try to place a needle that will render at the top slot this frame
    fn place(&mut self) -> Placement {
        let candidate = wrap(TOP_SLOT as i32 - self.spin.get() as i32);

        match self.needles.insert(candidate) {
            Ok(()) => {
                self.state = self.state.transition(Event::Placed);
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "Needle {} placed at slot {}",
                    self.needles.len(),
                    candidate
                );
                Placement::Placed(candidate)
            }
            Err(err) => {
                self.state = self.state.transition(Event::Rejected(err));
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Placement at slot {} rejected: {}, score {}",
                    candidate,
                    err,
                    self.needles.len()
                );
                Placement::Rejected(err)
            }
        }
    }

    /// Return to the initial PLAY state
    fn reset(&mut self) {
        self.needles.clear();
        self.spin = SpinIndex::ZERO;
        self.last_button = false;
        self.state = GameState::Play;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::ANGLE_STEPS;
    use crate::state::FLASH_TOGGLES;

    /// Step with the button released until the spin reaches `target`
    fn spin_to<const N: usize>(engine: &mut Engine<N>, target: u8) {
        while engine.spin().get() != target {
            engine.step(false);
        }
    }

    /// Release then press the button, returning the press frame
    fn press<const N: usize>(engine: &mut Engine<N>) -> Frame {
        engine.step(false);
        engine.step(true)
    }

    #[test]
    fn test_initial_state() {
        let engine = Engine::default();
        assert_eq!(engine.state(), GameState::Play);
        assert!(engine.needles().is_empty());
        assert_eq!(engine.spin(), SpinIndex::ZERO);
    }

    #[test]
    fn test_spin_advances_every_frame() {
        let mut engine = Engine::default();
        for expected in 1..=ANGLE_STEPS as u32 + 2 {
            let frame = engine.step(false);
            let Frame::Play {
                previous_spin,
                spin,
                placement,
            } = frame
            else {
                panic!("expected a play frame");
            };
            assert_eq!(spin.get() as u32, expected % ANGLE_STEPS as u32);
            assert_eq!(
                previous_spin.get() as u32,
                (expected - 1) % ANGLE_STEPS as u32
            );
            assert_eq!(placement, None);
        }
    }

    #[test]
    fn test_press_lands_on_top_slot() {
        let mut engine = Engine::default();
        spin_to(&mut engine, 5);

        let frame = engine.step(true);

        assert_eq!(
            frame,
            Frame::Play {
                previous_spin: SpinIndex::from(5),
                spin: SpinIndex::from(6),
                placement: Some(Placement::Placed(13)),
            }
        );
        let rendered: heapless::Vec<u8, 1> = engine.needles().rendered(engine.spin()).collect();
        assert_eq!(rendered.as_slice(), &[19]);
        assert!(engine.needles().collides(13));
    }

    #[test]
    fn test_held_button_places_once() {
        let mut engine = Engine::default();
        engine.step(true);
        for _ in 0..10 {
            assert!(matches!(
                engine.step(true),
                Frame::Play {
                    placement: None,
                    ..
                }
            ));
        }
        assert_eq!(engine.needles().len(), 1);
    }

    #[test]
    fn test_collision_enters_flash() {
        let mut engine = Engine::default();
        engine.step(true);
        assert_eq!(engine.needles().len(), 1);

        // A full turn later the same slot is under the top again
        for _ in 0..ANGLE_STEPS - 1 {
            engine.step(false);
        }
        let frame = engine.step(true);

        assert!(matches!(
            frame,
            Frame::Play {
                placement: Some(Placement::Rejected(PlacementError::Collision)),
                ..
            }
        ));
        assert!(engine.state().is_flashing());
        assert_eq!(engine.needles().len(), 1);
    }

    #[test]
    fn test_full_enters_flash_on_any_slot() {
        let mut engine: Engine<3> = Engine::bounded(EngineConfig::default());
        for _ in 0..3 {
            assert!(matches!(
                press(&mut engine),
                Frame::Play {
                    placement: Some(Placement::Placed(_)),
                    ..
                }
            ));
        }
        assert!(engine.needles().is_full());

        // Presses landed on 17, 15 and 13; the next one lands on 11
        let stored: heapless::Vec<u8, 3> = engine.needles().iter().collect();
        assert_eq!(stored.as_slice(), &[17, 15, 13]);
        assert!(!engine.needles().collides(11));
        let frame = press(&mut engine);

        assert!(matches!(
            frame,
            Frame::Play {
                placement: Some(Placement::Rejected(PlacementError::Full)),
                ..
            }
        ));
        assert!(engine.state().is_flashing());
    }

    #[test]
    fn test_flash_resets_after_six_toggles() {
        let mut engine = Engine::default();
        engine.step(true);
        for _ in 0..ANGLE_STEPS - 1 {
            engine.step(false);
        }
        engine.step(true);
        assert!(engine.state().is_flashing());

        let mut lit = [false; FLASH_TOGGLES as usize];
        for (i, phase) in lit.iter_mut().enumerate() {
            // Presses during FLASH are ignored
            let Frame::Flash { lit, finished } = engine.step(i % 2 == 0) else {
                panic!("expected a flash frame");
            };
            *phase = lit;
            assert_eq!(finished, i + 1 == FLASH_TOGGLES as usize);
        }

        assert_eq!(lit, [true, false, true, false, true, false]);
        assert_eq!(engine.state(), GameState::Play);
        assert!(engine.needles().is_empty());
        assert_eq!(engine.spin(), SpinIndex::ZERO);

        // Button memory was cleared, so a held button counts as a fresh press
        assert!(matches!(
            engine.step(true),
            Frame::Play {
                placement: Some(Placement::Placed(18)),
                ..
            }
        ));
    }

    #[test]
    fn test_custom_spin_steps() {
        let mut engine: Engine = Engine::new(EngineConfig { spin_steps: 5 });
        engine.step(false);
        engine.step(false);
        assert_eq!(engine.spin().get(), 10);
        for _ in 0..3 {
            engine.step(false);
        }
        assert_eq!(engine.spin().get(), 1);
    }
}
