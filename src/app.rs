use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use pong::{
    config::Config,
    game::Game,
    input::KeyState,
    pixel_buffer::PixelBuffer,
    timing::{FixedStep, FramePacer},
};
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::{error::PlatformError, renderer::Renderer};

pub struct App {
    pub window: Arc<Window>,
    pub game: Game,
    pub keys: KeyState,
    pub pixels: PixelBuffer,
    clock: FixedStep,
    pacer: FramePacer,
    last_frame: Duration,
}
impl App {
    pub fn init(config: &Config) -> Result<(App, EventLoop<()>), PlatformError> {
        let ev_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width as u32, config.height as u32))
            .with_resizable(false)
            .build(&ev_loop)?;

        let app = Self {
            window: Arc::new(window),
            game: Game::new(config),
            keys: KeyState::new(),
            pixels: PixelBuffer::new(config.width, config.height),
            clock: FixedStep::new(config.tick(), config.max_backlog),
            pacer: FramePacer::new(config.min_frame),
            last_frame: Duration::ZERO,
        };

        Ok((app, ev_loop))
    }

    /// Simulates the time the previous frame took, then draws and presents.
    pub fn run_frame(&mut self, renderer: &mut Renderer) -> Result<(), PlatformError> {
        let frame_start = Instant::now();

        let steps = self.clock.advance(self.last_frame);
        let dt = self.clock.dt();
        for _ in 0..steps {
            self.game.step(&self.keys, dt);
        }

        self.game.render(&mut self.pixels);
        renderer.upload_pixels(&self.pixels);
        renderer.render()?;

        self.last_frame = self.pacer.finish_frame(frame_start);
        Ok(())
    }
}
