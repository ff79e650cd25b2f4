#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub fn lerp(a: f32, b: f32, pct: f32) -> f32 {
    a + pct * (b - a)
}

pub fn get_flag_u8(byte: u8, flag: u8) -> bool {
    byte & (1 << flag) != 0
}
pub fn set_flag_u8(byte: &mut u8, flag: u8, value: bool) {
    let mask = 1 << flag;
    *byte &= !mask;
    *byte |= if value { mask } else { 0 };
}

/// Dimensions of the playing field in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}
impl Field {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}
