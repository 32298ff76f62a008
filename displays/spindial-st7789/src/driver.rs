//! ST7789 driver
//!
//! Driver for ST7789-based RGB565 TFT panels on a write-only serial bus.
//! Every transaction is framed by chip-select; the data/command line tells
//! the controller whether the bytes are an opcode or its operands.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use spindial_hal::{BusPin, DisplayBus, BURST_LEN};

use crate::cmd;
use crate::color::to_raw;
use crate::geometry::{PanelGeometry, PanelOffsets, Rotation, CONTROLLER_COLUMNS, CONTROLLER_ROWS};

/// Pixels per full burst
const BURST_PIXELS: usize = BURST_LEN / 2;

/// Hardware reset hold time per edge
const RESET_HOLD_MS: u32 = 10;

/// One step of the power-on sequence
struct InitStep {
    command: u8,
    params: &'static [u8],
    delay_ms: u32,
}

impl InitStep {
    const fn new(command: u8, params: &'static [u8], delay_ms: u32) -> Self {
        Self {
            command,
            params,
            delay_ms,
        }
    }
}

/// Power-on sequence, sent after the hardware reset
const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::new(cmd::SWRESET, &[], 15),
    InitStep::new(cmd::SLPOUT, &[], 10),
    InitStep::new(cmd::COLMOD, &[cmd::COLMOD_16BIT], 10),
    // Row/column order, RGB; replaced by set_rotation below
    InitStep::new(cmd::MADCTL, &[0x08], 0),
    // Full RAM window: columns 0..240, rows 0..320
    InitStep::new(cmd::CASET, &[0x00, 0x00, 0x00, 0xF0], 0),
    InitStep::new(cmd::RASET, &[0x00, 0x00, 0x01, 0x40], 0),
    InitStep::new(cmd::INVON, &[], 10),
    InitStep::new(cmd::NORON, &[], 10),
    InitStep::new(cmd::DISPON, &[], 10),
];

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Visible columns (at most 240)
    pub width: u16,
    /// Visible rows (at most 320)
    pub height: u16,
    /// Rotation applied during init
    pub rotation: Rotation,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            rotation: Rotation::Deg180,
        }
    }
}

/// ST7789 display driver
pub struct St7789<B> {
    bus: B,
    config: PanelConfig,
    offsets: PanelOffsets,
    rotation: Rotation,
    /// RAM address of panel pixel (0, 0) in the current rotation
    origin: (u16, u16),
}

impl<B: DisplayBus> St7789<B> {
    /// Create a new driver; nothing is sent until [`init`](Self::init)
    ///
    /// The size is clamped to the controller's 240x320 RAM.
    pub fn new(bus: B, config: PanelConfig) -> Self {
        let config = PanelConfig {
            width: config.width.min(CONTROLLER_COLUMNS),
            height: config.height.min(CONTROLLER_ROWS),
            ..config
        };
        Self {
            bus,
            config,
            offsets: PanelOffsets::default(),
            rotation: config.rotation,
            origin: (0, 0),
        }
    }

    /// Reset and configure the controller, then clear the panel to black
    /// and switch the backlight on
    ///
    /// The controller is never read back; a missing panel simply stays dark.
    pub fn init(&mut self) {
        let PanelConfig {
            width,
            height,
            rotation,
        } = self.config;
        self.offsets = PanelGeometry::classify(width, height).offsets(width, height);

        self.hard_reset();

        for step in INIT_SEQUENCE {
            self.command(step.command);
            if !step.params.is_empty() {
                self.data(step.params);
            }
            if step.delay_ms > 0 {
                self.bus.delay_ms(step.delay_ms);
            }
        }

        self.set_rotation(rotation);
        self.fill_screen(Rgb565::BLACK);
        self.backlight_on();

        #[cfg(feature = "defmt")]
        defmt::info!("ST7789 {}x{} ready, {}", width, height, rotation);
    }

    /// Pulse the reset line
    fn hard_reset(&mut self) {
        self.bus.set_pin(BusPin::Reset, true);
        self.bus.delay_ms(RESET_HOLD_MS);
        self.bus.set_pin(BusPin::Reset, false);
        self.bus.delay_ms(RESET_HOLD_MS);
        self.bus.set_pin(BusPin::Reset, true);
        self.bus.delay_ms(RESET_HOLD_MS);
    }

    fn select(&mut self) {
        self.bus.set_pin(BusPin::ChipSelect, false);
    }

    fn deselect(&mut self) {
        self.bus.set_pin(BusPin::ChipSelect, true);
    }

    /// Send a command byte
    fn command(&mut self, command: u8) {
        self.bus.set_pin(BusPin::DataCommand, false);
        self.select();
        self.bus.send(&[command]);
        self.bus.wait_send_end();
        self.deselect();
    }

    /// Send operand bytes as one transaction
    fn data(&mut self, bytes: &[u8]) {
        self.bus.set_pin(BusPin::DataCommand, true);
        self.select();
        for burst in bytes.chunks(BURST_LEN) {
            self.bus.send(burst);
            self.bus.wait_send_end();
        }
        self.deselect();
    }

    /// Target pixel writes at the inclusive rectangle (x0, y0)..=(x1, y1)
    ///
    /// Coordinates are in panel space; the rotation offset is added here.
    /// Leaves the controller expecting pixel data.
    pub fn set_address_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        let (dx, dy) = self.origin;
        let [xs_hi, xs_lo] = x0.saturating_add(dx).to_be_bytes();
        let [xe_hi, xe_lo] = x1.saturating_add(dx).to_be_bytes();
        let [ys_hi, ys_lo] = y0.saturating_add(dy).to_be_bytes();
        let [ye_hi, ye_lo] = y1.saturating_add(dy).to_be_bytes();

        self.command(cmd::CASET);
        self.data(&[xs_hi, xs_lo, xe_hi, xe_lo]);

        self.command(cmd::RASET);
        self.data(&[ys_hi, ys_lo, ye_hi, ye_lo]);

        self.command(cmd::RAMWR);
    }

    /// Write `colors` into the window (x0, y0)..=(x1, y1)
    pub fn fill_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, colors: &[Rgb565]) {
        self.fill_window_iter(x0, y0, x1, y1, colors.iter().copied());
    }

    /// Stream colors into the window (x0, y0)..=(x1, y1)
    ///
    /// Pixels go out big-endian in full bursts; the last burst carries the
    /// remainder. Each burst completes before the next one starts.
    pub fn fill_window_iter<I>(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, colors: I)
    where
        I: IntoIterator<Item = Rgb565>,
    {
        self.set_address_window(x0, y0, x1, y1);

        self.bus.set_pin(BusPin::DataCommand, true);
        self.select();

        let mut burst = [0u8; BURST_LEN];
        let mut len = 0;
        for color in colors {
            burst[len..len + 2].copy_from_slice(&to_raw(color).to_be_bytes());
            len += 2;
            if len == BURST_LEN {
                self.bus.send(&burst);
                self.bus.wait_send_end();
                len = 0;
            }
        }
        if len > 0 {
            self.bus.send(&burst[..len]);
            self.bus.wait_send_end();
        }

        self.deselect();
    }

    /// Fill the whole panel with one color
    ///
    /// Streams row by row from a single reused row buffer.
    pub fn fill_screen(&mut self, color: Rgb565) {
        let width = self.config.width as usize;
        let height = self.config.height;
        if width == 0 || height == 0 {
            return;
        }

        let mut row = [0u8; CONTROLLER_COLUMNS as usize * 2];
        let [hi, lo] = to_raw(color).to_be_bytes();
        for pixel in row.chunks_exact_mut(2).take(width) {
            pixel[0] = hi;
            pixel[1] = lo;
        }

        self.set_address_window(0, 0, width as u16 - 1, height - 1);

        self.bus.set_pin(BusPin::DataCommand, true);
        self.select();
        for _ in 0..height {
            for burst in row[..width * 2].chunks(BURST_PIXELS * 2) {
                self.bus.send(burst);
                self.bus.wait_send_end();
            }
        }
        self.deselect();
    }

    /// Select a rotation; any `u8` is reduced modulo 4
    ///
    /// Takes effect for every following address window.
    pub fn set_rotation(&mut self, rotation: impl Into<Rotation>) {
        let rotation = rotation.into();
        self.rotation = rotation;
        self.origin = rotation.origin(&self.offsets);

        self.command(cmd::MADCTL);
        self.data(&[rotation.madctl()]);
    }

    /// Write one pixel; off-panel coordinates are ignored
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) {
        if x >= self.config.width || y >= self.config.height {
            return;
        }

        self.set_address_window(x, y, x, y);
        self.data(&to_raw(color).to_be_bytes());
    }

    /// Switch the backlight on
    pub fn backlight_on(&mut self) {
        self.bus.set_pin(BusPin::Backlight, true);
    }

    /// Switch the backlight off
    pub fn backlight_off(&mut self) {
        self.bus.set_pin(BusPin::Backlight, false);
    }

    /// Enter or leave sleep mode
    pub fn sleep(&mut self, asleep: bool) {
        self.command(if asleep { cmd::SLPIN } else { cmd::SLPOUT });
    }

    /// Turn panel output on/off
    pub fn display_on(&mut self, on: bool) {
        self.command(if on { cmd::DISPON } else { cmd::DISPOFF });
    }

    /// Invert display colors
    pub fn invert(&mut self, inverted: bool) {
        self.command(if inverted { cmd::INVON } else { cmd::INVOFF });
    }

    /// Visible size (width, height)
    pub fn panel_size(&self) -> (u16, u16) {
        (self.config.width, self.config.height)
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// RAM address of panel pixel (0, 0) in the current rotation
    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Borrow the bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }
}
