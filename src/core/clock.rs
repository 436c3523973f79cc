use std::time::Instant;

/// Timing for one frame update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Seconds since the previous tick
    pub delta_time: f32,
    /// Seconds since the clock started
    pub total_time: f32,
    /// Zero-based frame number
    pub frame: u64,
}

/// Minimal frame clock - tracks delta time and frame count
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    frame: u64,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame: 0,
        }
    }

    /// Measure the time since the last tick and advance the clock
    pub fn tick(&mut self) -> FrameUpdate {
        let now = Instant::now();
        let update = FrameUpdate {
            delta_time: now.duration_since(self.last_tick).as_secs_f32(),
            total_time: now.duration_since(self.start).as_secs_f32(),
            frame: self.frame,
        };
        self.last_tick = now;
        self.frame += 1;
        update
    }

    /// Restart delta measurement (e.g. after the window was hidden)
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame rate over a fixed reporting interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    elapsed: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Count one frame; returns the average rate when an interval completes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval && self.elapsed > 0.0 {
            let fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}
