use crate::util::Color;

pub const BYTES_PER_PIXEL: usize = 4;

// Row-major, four bytes per pixel laid out as R, G, B, unused.
// The fourth byte is only ever touched by `clear`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}
impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Writes the color channels of one pixel. Coordinates outside the
    /// buffer are dropped, so shapes may be drawn partly off-screen.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        self.bytes[i] = color.r;
        self.bytes[i + 1] = color.g;
        self.bytes[i + 2] = color.b;
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        let mut px = [0; 4];
        px.copy_from_slice(&self.bytes[i..i + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Fills a `w` by `h` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y * self.width + x) * BYTES_PER_PIXEL)
    }
}
