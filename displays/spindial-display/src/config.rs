//! Dial layout and colors

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::primitives::Rectangle;
use spindial_core::EngineConfig;

/// Render loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialConfig {
    /// Dial centre in panel coordinates
    pub center: Point,
    /// Radius of the filled dial disc
    pub radius: u32,
    /// Screen background, also used to erase needles
    pub background: Rgb565,
    /// Dial, indicator, needles and score text
    pub foreground: Rgb565,
    /// Background color while FLASH is lit
    pub flash: Rgb565,
    /// Region cleared before the score is redrawn
    pub score_area: Rectangle,
    /// Top-left corner of the score text
    pub score_origin: Point,
    /// Pause after each frame
    pub frame_delay_ms: u32,
    /// Needle engine tunables
    pub engine: EngineConfig,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            center: Point::new(120, 120),
            radius: 60,
            background: Rgb565::WHITE,
            foreground: Rgb565::BLACK,
            flash: Rgb565::RED,
            score_area: Rectangle::new(Point::zero(), Size::new(30, 30)),
            score_origin: Point::new(5, 5),
            frame_delay_ms: 45,
            engine: EngineConfig::default(),
        }
    }
}

impl DialConfig {
    /// Default layout centred on a panel of the given size
    pub fn for_panel(size: Size) -> Self {
        Self {
            center: Point::new(size.width as i32 / 2, size.height as i32 / 2),
            ..Self::default()
        }
    }
}
