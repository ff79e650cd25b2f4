use std::time::{Duration, Instant};

/// Turns real elapsed time into a whole number of fixed simulation ticks.
#[derive(Clone, Debug)]
pub struct FixedStep {
    tick: Duration,
    accumulator: Duration,
    max_backlog: Duration,
}
impl FixedStep {
    pub fn new(tick: Duration, max_backlog: Duration) -> Self {
        Self {
            tick,
            accumulator: Duration::ZERO,
            max_backlog,
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }
    pub fn dt(&self) -> f32 {
        self.tick.as_secs_f32()
    }

    /// Returns how many ticks are due after `elapsed` more real time.
    /// A backlog longer than `max_backlog` counts as a stall and is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        if self.accumulator > self.max_backlog {
            log::debug!("dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
            return 0;
        }

        let steps = (self.accumulator.as_nanos() / self.tick.as_nanos()) as u32;
        self.accumulator -= self.tick * steps;
        steps
    }
}

/// Holds every frame to a minimum duration.
#[derive(Clone, Debug)]
pub struct FramePacer {
    min_frame: Duration,
}
impl FramePacer {
    pub fn new(min_frame: Duration) -> Self {
        Self { min_frame }
    }

    /// Sleeps out the rest of the frame if it was too short and returns
    /// the real duration of the frame that began at `frame_start`.
    pub fn finish_frame(&self, frame_start: Instant) -> Duration {
        let elapsed = frame_start.elapsed();
        if elapsed < self.min_frame {
            spin_sleep::sleep(self.min_frame - elapsed);
            return frame_start.elapsed();
        }
        elapsed
    }
}
