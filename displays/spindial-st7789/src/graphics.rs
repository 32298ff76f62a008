//! `embedded-graphics` integration
//!
//! Single pixels go through [`St7789::draw_pixel`]; solid and contiguous
//! fills that lie on the panel become one address window and a burst
//! stream.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;
use spindial_hal::DisplayBus;

use crate::driver::St7789;

impl<B: DisplayBus> OriginDimensions for St7789<B> {
    fn size(&self) -> Size {
        let (width, height) = self.panel_size();
        Size::new(width as u32, height as u32)
    }
}

impl<B: DisplayBus> St7789<B> {
    /// Inclusive window for an area that lies fully on the panel
    fn window(&self, area: &Rectangle) -> Option<(u16, u16, u16, u16)> {
        let bottom_right = area.bottom_right()?;
        if area.intersection(&self.bounding_box()) != *area {
            return None;
        }
        Some((
            area.top_left.x as u16,
            area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        ))
    }
}

impl<B: DisplayBus> DrawTarget for St7789<B> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) {
                self.draw_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        match self.window(area) {
            Some((x0, y0, x1, y1)) => {
                let count = (area.size.width * area.size.height) as usize;
                self.fill_window_iter(x0, y0, x1, y1, colors.into_iter().take(count));
                Ok(())
            }
            None => self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            ),
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if let Some((x0, y0, x1, y1)) = self.window(&area) {
            let count = (area.size.width * area.size.height) as usize;
            self.fill_window_iter(x0, y0, x1, y1, core::iter::repeat(color).take(count));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color);
        Ok(())
    }
}
