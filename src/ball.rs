use crate::{
    paddle::Paddle,
    pixel_buffer::PixelBuffer,
    util::{Color, Field, Pos},
};

/// The player credited with a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub pos: Pos,
    pub radius: i32,
    pub xv: f32,
    pub yv: f32,
    pub color: Color,
}
impl Ball {
    pub fn new(pos: Pos, radius: i32, xv: f32, yv: f32, color: Color) -> Self {
        Self {
            pos,
            radius,
            xv,
            yv,
            color,
        }
    }

    /// Advances the ball by `dt` seconds and resolves collisions.
    ///
    /// Leaving the field on one side credits the paddle on the other side,
    /// recenters the ball and reports who scored. Velocity survives the
    /// recentering, so the next rally starts toward the same side.
    pub fn update(
        &mut self,
        left: &mut Paddle,
        right: &mut Paddle,
        dt: f32,
        field: Field,
    ) -> Option<Side> {
        self.pos.x += self.xv * dt;
        self.pos.y += self.yv * dt;

        let radius = self.radius as f32;
        if self.pos.y - radius < 0.0 || self.pos.y + radius > field.height as f32 {
            self.yv = -self.yv;
        }

        let mut scored = None;
        if self.pos.x < 0.0 {
            right.score += 1;
            self.pos = field.center();
            scored = Some(Side::Right);
        } else if self.pos.x > field.width as f32 {
            left.score += 1;
            self.pos = field.center();
            scored = Some(Side::Left);
        }

        // Paddles are checked against the recentered ball too.
        let x = self.pos.x as i32;
        if x - self.radius < left.pos.x as i32 + left.w / 2 && left.spans(self.pos.y) {
            self.xv = -self.xv;
        }
        if x + self.radius > right.pos.x as i32 - right.w / 2 && right.spans(self.pos.y) {
            self.xv = -self.xv;
        }

        scored
    }

    /// Rasterizes the ball as a filled circle.
    pub fn draw(&self, buffer: &mut PixelBuffer) {
        let (cx, cy) = (self.pos.x as i32, self.pos.y as i32);
        let r = self.radius;
        for y in -r..r {
            for x in -r..r {
                if x * x + y * y < r * r {
                    buffer.set_pixel(cx + x, cy + y, self.color);
                }
            }
        }
    }
}
