//! Display bus abstractions
//!
//! The display controller is driven over a write-only serial link framed by
//! a chip-select line and a data/command select line. Pixel data is pushed
//! in bounded bursts, each of which must complete before the next is issued.

/// Largest burst the transport sends efficiently in one transaction.
///
/// 120 bytes = 60 RGB565 pixels.
pub const BURST_LEN: usize = 120;

/// Control lines owned by the display bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusPin {
    /// Data/command select: low = command byte, high = data bytes
    DataCommand,
    /// Chip select, active low
    ChipSelect,
    /// Controller hardware reset, active low
    Reset,
    /// Panel backlight enable, active high
    Backlight,
}

/// Burst transport to a display controller
///
/// Implementations perform no framing of their own: the driver decides when
/// to toggle the select lines around each transaction. Failures are not
/// reported; a non-responding controller shows up only as a wrong picture.
pub trait DisplayBus {
    /// Start sending one burst of at most [`BURST_LEN`] bytes
    fn send(&mut self, bytes: &[u8]);

    /// Block until the last burst has fully left the transmitter
    fn wait_send_end(&mut self);

    /// Drive a control line to the given electrical level
    fn set_pin(&mut self, pin: BusPin, high: bool);

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DisplayBus + ?Sized> DisplayBus for &mut T {
    fn send(&mut self, bytes: &[u8]) {
        T::send(self, bytes)
    }

    fn wait_send_end(&mut self) {
        T::wait_send_end(self)
    }

    fn set_pin(&mut self, pin: BusPin, high: bool) {
        T::set_pin(self, pin, high)
    }

    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
