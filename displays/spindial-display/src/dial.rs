//! Frame orchestration
//!
//! One call to [`Dial::frame`] is one iteration of the watch's main loop:
//!
//! 1. Sample the button
//! 2. Step the engine
//! 3. PLAY: erase needles at the previous spin, draw them at the new spin,
//!    repaint the score if it changed
//! 4. FLASH: fill the screen lit or unlit; repaint the scene when done

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use spindial_core::{Engine, Frame, SpinIndex};
use spindial_hal::InputPin;

use crate::config::DialConfig;
use crate::scene;

/// Dial renderer driving the needle engine
pub struct Dial {
    config: DialConfig,
    engine: Engine,
    /// Score currently painted, `None` after a full repaint
    shown_score: Option<usize>,
}

impl Dial {
    /// Create a dial with an empty engine
    pub fn new(config: DialConfig) -> Self {
        Self {
            engine: Engine::new(config.engine),
            config,
            shown_score: None,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Get the engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Paint the static scene
    ///
    /// Must be called once before the first frame. The score is painted on
    /// the next frame.
    pub fn draw_scene<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        scene::draw_scene(target, &self.config)?;
        self.shown_score = None;
        Ok(())
    }

    /// Run one frame without pacing
    pub fn frame<D, P>(&mut self, target: &mut D, button: &mut P) -> Result<Frame, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        P: InputPin,
    {
        let frame = self.engine.step(button.is_high());

        match frame {
            Frame::Play {
                previous_spin,
                spin,
                ..
            } => self.redraw_needles(target, previous_spin, spin)?,
            Frame::Flash { lit, finished } => {
                let color = if lit {
                    self.config.flash
                } else {
                    self.config.background
                };
                target.clear(color)?;

                if finished {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Flash finished, repainting dial");
                    self.draw_scene(target)?;
                }
            }
        }

        Ok(frame)
    }

    /// Run one frame, then wait out the frame period
    pub fn run_frame<D, P, T>(
        &mut self,
        target: &mut D,
        button: &mut P,
        delay: &mut T,
    ) -> Result<Frame, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        P: InputPin,
        T: DelayNs,
    {
        let frame = self.frame(target, button)?;
        delay.delay_ms(self.config.frame_delay_ms);
        Ok(frame)
    }

    fn redraw_needles<D>(
        &mut self,
        target: &mut D,
        previous_spin: SpinIndex,
        spin: SpinIndex,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let center = self.config.center;
        let needles = self.engine.needles();

        // Erase everything before drawing anything; neighbours may share pixels
        for slot in needles.rendered(previous_spin) {
            scene::draw_needle(target, center, slot, self.config.background)?;
        }
        for slot in needles.rendered(spin) {
            scene::draw_needle(target, center, slot, self.config.foreground)?;
        }

        let count = needles.len();
        if self.shown_score != Some(count) {
            scene::draw_score(target, &self.config, count)?;
            self.shown_score = Some(count);
        }
        Ok(())
    }
}
