use crate::{
    font::draw_digit,
    input::{Key, KeyState},
    pixel_buffer::PixelBuffer,
    util::{lerp, Color, Field, Pos},
};

pub const SCORE_Y: f32 = 35.0;
pub const SCORE_CELL_SIZE: i32 = 10;
// How far the score sits from the paddle toward the middle of the field.
pub const SCORE_PULL: f32 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
}
impl Controls {
    pub const PLAYER_ONE: Self = Self {
        up: Key::P1Up,
        down: Key::P1Down,
    };
    pub const PLAYER_TWO: Self = Self {
        up: Key::P2Up,
        down: Key::P2Down,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub pos: Pos,
    pub w: i32,
    pub h: i32,
    pub speed: f32,
    pub color: Color,
    pub score: u32,
    pub controls: Controls,
}
impl Paddle {
    pub fn new(pos: Pos, w: i32, h: i32, speed: f32, color: Color, controls: Controls) -> Self {
        Self {
            pos,
            w,
            h,
            speed,
            color,
            score: 0,
            controls,
        }
    }

    /// Moves the paddle while one of its keys is held. Up wins when both are.
    /// The paddle is free to leave the field.
    pub fn update(&mut self, keys: &KeyState, dt: f32) {
        if keys.held(self.controls.up) {
            self.pos.y -= self.speed * dt;
        } else if keys.held(self.controls.down) {
            self.pos.y += self.speed * dt;
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - (self.h / 2) as f32
    }
    pub fn bottom(&self) -> f32 {
        self.pos.y + (self.h / 2) as f32
    }
    pub fn spans(&self, y: f32) -> bool {
        y > self.top() && y < self.bottom()
    }

    pub fn draw(&self, buffer: &mut PixelBuffer, field: Field) {
        let start_x = self.pos.x as i32 - self.w / 2;
        let start_y = self.pos.y as i32 - self.h / 2;
        buffer.fill_rect(start_x, start_y, self.w, self.h, self.color);

        let score_x = lerp(self.pos.x, field.center().x, SCORE_PULL);
        draw_digit(
            buffer,
            Pos::new(score_x, SCORE_Y),
            self.color,
            SCORE_CELL_SIZE,
            self.score,
        );
    }
}
