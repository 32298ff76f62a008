//! Spindial - Watch Dial Game Firmware
//!
//! Main firmware binary for an RP2040 board driving a round ST7789 panel.
//! Brings up the panel, paints the dial and then runs the frame loop
//! forever.
//!
//! Pin assignments (reference board):
//! - SPI0 SCK=GPIO18, MOSI=GPIO19
//! - CS=GPIO17, DC=GPIO16, RST=GPIO20, BL=GPIO21
//! - Button=GPIO15, active high with pull-down

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use spindial_display::{Dial, DialConfig};
use spindial_hal::{EhalInput, SpiDisplayBus};
use spindial_st7789::{PanelConfig, St7789};

/// SPI clock for the panel
const SPI_FREQUENCY_HZ: u32 = 24_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Spindial firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup SPI0 for the panel, transmit only
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let dc = Output::new(p.PIN_16, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let rst = Output::new(p.PIN_20, Level::High);
    let bl = Output::new(p.PIN_21, Level::Low);

    let bus = SpiDisplayBus::new(spi, dc, cs, rst, bl, Delay);
    let panel_config = PanelConfig::default();
    let mut display = St7789::new(bus, panel_config);
    display.init();
    info!(
        "Display initialized: {}x{}",
        panel_config.width, panel_config.height
    );

    let mut button = EhalInput(Input::new(p.PIN_15, Pull::Down));

    let mut dial = Dial::new(DialConfig::default());
    // The panel's DrawTarget is infallible
    let Ok(()) = dial.draw_scene(&mut display);
    info!("Dial ready");

    let mut delay = Delay;
    loop {
        let Ok(_frame) = dial.run_frame(&mut display, &mut button, &mut delay);
    }
}
