/// Per-mood animation cursor. Reset whenever a mood is entered.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationState {
    /// Animation time in seconds (scaled, so it can run slower than real time).
    pub elapsed: f32,
    pub frame: usize,
}

impl AnimationState {
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame = 0;
    }

    /// Advance the clock by `dt * rate` and pick the frame for `fps`.
    pub fn advance(&mut self, dt: f32, rate: f32, fps: f32, frame_count: usize) {
        self.elapsed += dt * rate;
        self.frame = frame_index(self.elapsed, fps, frame_count);
    }
}

/// `floor(elapsed * fps) mod frame_count`, treating an empty clip as one frame.
pub fn frame_index(elapsed: f32, fps: f32, frame_count: usize) -> usize {
    let total = frame_count.max(1);
    let raw = elapsed * fps;
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw.floor() as usize) % total
}
