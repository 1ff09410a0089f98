use nace_common::color::Color;

use crate::machine::VRAM_SIZE;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// How lit pixels are coloured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    /// Plain white phosphor.
    Monochrome,
    /// The cellophane strips of the upright cabinet: green over the bases and
    /// the player, red across the UFO lane.
    #[default]
    ColorBands,
}

impl Overlay {
    /// `row` counts up from the bottom of the rotated screen.
    fn color(self, row: usize) -> Color {
        match self {
            Overlay::Monochrome => Color::WHITE,
            Overlay::ColorBands if row > 200 && row < 220 => Color::RED,
            Overlay::ColorBands if row < 80 => Color::GREEN,
            Overlay::ColorBands => Color::WHITE,
        }
    }
}

/// Convert the 1bpp frame buffer to an RGB24 image.
///
/// The monitor is rotated 90 degrees counter-clockwise: each run of 32 bytes
/// is one screen column read bottom-up, least significant bit first. Byte
/// `i`, bit `b` lands at `x = i / 32`, `y = 255 - ((i % 32) * 8 + b)`.
pub fn render_video(vram: &[u8], screen: &mut [u8], overlay: Overlay) {
    debug_assert_eq!(vram.len(), VRAM_SIZE);
    debug_assert_eq!(screen.len(), SCREEN_WIDTH * SCREEN_HEIGHT * 3);

    for (i, &byte) in vram.iter().enumerate() {
        let x = i / 32;
        let row_base = (i % 32) * 8;
        let color = overlay.color(row_base);
        for b in 0..8 {
            let y = SCREEN_HEIGHT - 1 - (row_base + b);
            let pixel = if byte & (1 << b) != 0 {
                color
            } else {
                Color::BLACK
            };
            pixel.write_rgb24(screen, y * SCREEN_WIDTH + x);
        }
    }
}

/// Striped band across the top of the screen while paused.
pub fn overlay_pause_banner(screen: &mut [u8]) {
    let banner_height = 12usize.min(SCREEN_HEIGHT);
    for y in 0..banner_height {
        let color = if y % 2 == 0 { Color::WHITE } else { Color::BLACK };
        for x in 0..SCREEN_WIDTH {
            color.write_rgb24(screen, y * SCREEN_WIDTH + x);
        }
    }
}
