use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Jump-and-spin arc. The pet leaves from `start` and lands back on it exactly.
#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    pub start: Vec2,
    pub elapsed: f32,
    pub duration: f32,
    /// Apex height in pixels (screen-up).
    pub peak: f32,
    /// Full clockwise turns over the whole jump.
    pub rotations: f32,
}

/// Where the arc puts the pet on a given tick.
#[derive(Debug, Clone, Copy)]
pub struct CelebrationFrame {
    pub position: Vec2,
    pub rotation: f32,
    pub finished: bool,
}

impl Celebration {
    pub fn new(start: Vec2, duration: f32, peak: f32, rotations: f32) -> Self {
        Self {
            start,
            elapsed: 0.0,
            duration,
            peak,
            rotations,
        }
    }

    /// Normalised progress in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn advance(&mut self, dt: f32) -> CelebrationFrame {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            // Snap to the recorded start so float error never drifts the pet.
            return CelebrationFrame {
                position: self.start,
                rotation: 0.0,
                finished: true,
            };
        }
        let t = self.progress();
        CelebrationFrame {
            position: Vec2::new(self.start.x, self.start.y - self.peak * (PI * t).sin()),
            rotation: TAU * self.rotations * t,
            finished: false,
        }
    }
}
