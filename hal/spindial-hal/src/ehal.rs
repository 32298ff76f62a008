//! `embedded-hal` 1.0 adapters
//!
//! Lets any chip HAL that implements the `embedded-hal` SPI, digital and
//! delay traits drive the display and feed the button.
//!
//! Transport errors stop here: they are logged (with the `defmt` feature)
//! and otherwise dropped, because the controller protocol has no read-back
//! to recover with.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin, PinState};
use embedded_hal::spi::SpiBus;

use crate::gpio::InputPin;
use crate::spi::{BusPin, DisplayBus};

/// Placeholder for a control line that is not wired
///
/// Boards that tie the backlight to a rail (or chip-select to ground) pass
/// `NoPin` in its place.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// [`DisplayBus`] over an `embedded-hal` SPI bus plus control pins
pub struct SpiDisplayBus<SPI, DC, CS, RST, BL, D> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    bl: BL,
    delay: D,
}

impl<SPI, DC, CS, RST, BL, D> SpiDisplayBus<SPI, DC, CS, RST, BL, D>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    D: DelayNs,
{
    /// Create a new bus from its parts
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST, bl: BL, delay: D) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            bl,
            delay,
        }
    }

    /// Release the underlying peripherals
    pub fn release(self) -> (SPI, DC, CS, RST, BL, D) {
        (self.spi, self.dc, self.cs, self.rst, self.bl, self.delay)
    }
}

impl<SPI, DC, CS, RST, BL, D> DisplayBus for SpiDisplayBus<SPI, DC, CS, RST, BL, D>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    D: DelayNs,
{
    fn send(&mut self, bytes: &[u8]) {
        if self.spi.write(bytes).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("SPI write of {} bytes failed", bytes.len());
        }
    }

    fn wait_send_end(&mut self) {
        if self.spi.flush().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("SPI flush failed");
        }
    }

    fn set_pin(&mut self, pin: BusPin, high: bool) {
        let state = PinState::from(high);
        let ok = match pin {
            BusPin::DataCommand => self.dc.set_state(state).is_ok(),
            BusPin::ChipSelect => self.cs.set_state(state).is_ok(),
            BusPin::Reset => self.rst.set_state(state).is_ok(),
            BusPin::Backlight => self.bl.set_state(state).is_ok(),
        };
        if !ok {
            #[cfg(feature = "defmt")]
            defmt::warn!("Failed to drive {}", pin);
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

/// [`InputPin`] over an `embedded-hal` digital input
///
/// A failed read counts as low, so a faulty button never fires.
pub struct EhalInput<P>(pub P);

impl<P: digital::InputPin> InputPin for EhalInput<P> {
    fn is_high(&mut self) -> bool {
        self.0.is_high().unwrap_or(false)
    }
}
