use crate::{
    ball::{Ball, Side},
    config::Config,
    input::{Key, KeyState},
    paddle::{Controls, Paddle},
    pixel_buffer::PixelBuffer,
    util::{Color, Field, Pos},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Waiting for a serve. Nothing moves.
    Start,
    Play,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    Idle,
    Served,
    Scored(Side),
}

pub struct Game {
    state: State,
    field: Field,
    win_score: u32,
    left: Paddle,
    right: Paddle,
    ball: Ball,
}
impl Game {
    pub fn new(config: &Config) -> Self {
        let field = Field::new(config.width as i32, config.height as i32);

        let left = Paddle::new(
            Pos::new(100.0, 100.0),
            20,
            100,
            300.0,
            Color::WHITE,
            Controls::PLAYER_ONE,
        );
        let right = Paddle::new(
            Pos::new(field.width as f32 - 100.0, 100.0),
            20,
            100,
            300.0,
            Color::WHITE,
            Controls::PLAYER_TWO,
        );
        let ball = Ball::new(Pos::new(300.0, 300.0), 20, 400.0, 400.0, Color::WHITE);

        Self {
            state: State::Start,
            field,
            win_score: config.win_score,
            left,
            right,
            ball,
        }
    }

    /// Runs one simulation tick of `dt` seconds.
    pub fn step(&mut self, keys: &KeyState, dt: f32) -> StepOutcome {
        match self.state {
            State::Start => self.wait_for_serve(keys),
            State::Play => self.play(keys, dt),
        }
    }

    fn wait_for_serve(&mut self, keys: &KeyState) -> StepOutcome {
        if !keys.held(Key::Serve) {
            return StepOutcome::Idle;
        }

        if self.match_over() {
            log::info!("new match after {}:{}", self.left.score, self.right.score);
            self.left.score = 0;
            self.right.score = 0;
        }
        log::debug!("serve");
        self.state = State::Play;
        StepOutcome::Served
    }

    fn play(&mut self, keys: &KeyState, dt: f32) -> StepOutcome {
        self.left.update(keys, dt);
        self.right.update(keys, dt);

        let scored = self.ball.update(&mut self.left, &mut self.right, dt, self.field);
        let Some(side) = scored else {
            return StepOutcome::Idle;
        };

        log::info!("{side:?} scores, {}:{}", self.left.score, self.right.score);
        self.state = State::Start;
        StepOutcome::Scored(side)
    }

    pub fn match_over(&self) -> bool {
        self.left.score >= self.win_score || self.right.score >= self.win_score
    }

    pub fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear();
        self.left.draw(buffer, self.field);
        self.right.draw(buffer, self.field);
        self.ball.draw(buffer);
    }

    pub fn state(&self) -> State {
        self.state
    }
    pub fn field(&self) -> Field {
        self.field
    }
    pub fn ball(&self) -> &Ball {
        &self.ball
    }
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }
    pub fn left(&self) -> &Paddle {
        &self.left
    }
    pub fn left_mut(&mut self) -> &mut Paddle {
        &mut self.left
    }
    pub fn right(&self) -> &Paddle {
        &self.right
    }
    pub fn right_mut(&mut self) -> &mut Paddle {
        &mut self.right
    }
}
