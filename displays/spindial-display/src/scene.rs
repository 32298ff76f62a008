//! Scene primitives
//!
//! Free functions drawing the pieces of the dial. Needles must be drawn
//! with identical geometry for both draw and erase, so everything here is
//! a pure function of its arguments.

use core::fmt::Write;

use embedded_graphics::mono_font::{ascii::FONT_9X15, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use spindial_core::angle::needle_offsets;

use crate::config::DialConfig;

/// Gap between the dial edge and the near end of the indicator
const INDICATOR_GAP: i32 = 2;

/// Length of the indicator tick
const INDICATOR_LEN: i32 = 6;

/// Paint the static scene: background, dial disc and top indicator
pub fn draw_scene<D>(target: &mut D, config: &DialConfig) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(config.background)?;

    Circle::with_center(config.center, config.radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(config.foreground))
        .draw(target)?;

    draw_indicator(target, config)
}

/// Short vertical tick above the dial marking the insertion slot
pub fn draw_indicator<D>(target: &mut D, config: &DialConfig) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let near = config.center.y - config.radius as i32 - INDICATOR_GAP;
    Line::new(
        Point::new(config.center.x, near - INDICATOR_LEN),
        Point::new(config.center.x, near),
    )
    .into_styled(PrimitiveStyle::with_stroke(config.foreground, 1))
    .draw(target)
}

/// Draw one needle at a rendered slot
///
/// The needle is three pixels thick: the base-to-tip segment repeated
/// with -1, 0, +1 pixel offsets along each axis.
pub fn draw_needle<D>(target: &mut D, center: Point, slot: u8, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let ((bx, by), (tx, ty)) = needle_offsets(slot);
    let base = center + Point::new(bx.into(), by.into());
    let tip = center + Point::new(tx.into(), ty.into());
    let style = PrimitiveStyle::with_stroke(color, 1);

    for t in -1..=1 {
        let dx = Point::new(t, 0);
        let dy = Point::new(0, t);
        Line::new(base + dx, tip + dx).into_styled(style).draw(target)?;
        Line::new(base + dy, tip + dy).into_styled(style).draw(target)?;
    }
    Ok(())
}

/// Clear the score area and print the needle count
pub fn draw_score<D>(target: &mut D, config: &DialConfig, count: usize) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&config.score_area, config.background)?;

    // 20 digits holds any usize
    let mut text: String<20> = String::new();
    let _ = write!(text, "{}", count);

    Text::with_baseline(
        &text,
        config.score_origin,
        MonoTextStyle::new(&FONT_9X15, config.foreground),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}
