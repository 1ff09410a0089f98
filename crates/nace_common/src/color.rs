#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Write this color into an RGB24 buffer at pixel `index`.
    #[inline]
    pub fn write_rgb24(&self, buffer: &mut [u8], index: usize) {
        let offset = index * 3;
        buffer[offset] = self.r;
        buffer[offset + 1] = self.g;
        buffer[offset + 2] = self.b;
    }
}
