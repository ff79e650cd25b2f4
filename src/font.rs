use crate::{
    pixel_buffer::PixelBuffer,
    util::{Color, Pos},
};

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
pub const MAX_DIGIT: u32 = 5;

// 5 rows of 3 cells each, top row first.
#[rustfmt::skip]
pub static GLYPHS: [[u8; 15]; 6] = [
    [
        1, 1, 1,
        1, 0, 1,
        1, 0, 1,
        1, 0, 1,
        1, 1, 1,
    ],
    [
        1, 1, 0,
        0, 1, 0,
        0, 1, 0,
        0, 1, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
        1, 0, 0,
        1, 1, 1,
    ],
    [
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
    [
        1, 0, 1,
        1, 0, 1,
        1, 1, 1,
        0, 0, 1,
        0, 0, 1,
    ],
    [
        1, 1, 1,
        1, 0, 0,
        1, 1, 1,
        0, 0, 1,
        1, 1, 1,
    ],
];

/// Draws `digit` centered on `pos`, each glyph cell scaled to a
/// `cell_size` square. Digits without a glyph draw nothing.
pub fn draw_digit(buffer: &mut PixelBuffer, pos: Pos, color: Color, cell_size: i32, digit: u32) {
    let Some(glyph) = GLYPHS.get(digit as usize) else {
        log::trace!("no glyph for digit {digit}");
        return;
    };

    let start_x = pos.x as i32 - (cell_size * GLYPH_WIDTH) / 2;
    let start_y = pos.y as i32 - (cell_size * GLYPH_HEIGHT) / 2;

    for (i, &cell) in glyph.iter().enumerate() {
        if cell == 0 {
            continue;
        }
        let col = i as i32 % GLYPH_WIDTH;
        let row = i as i32 / GLYPH_WIDTH;
        let x = start_x + col * cell_size;
        let y = start_y + row * cell_size;
        buffer.fill_rect(x, y, cell_size, cell_size, color);
    }
}
