use glam::Vec2;

/// Ephemeral steering goal that overrides wandering until reached or cancelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowTarget {
    pub point: Vec2,
    /// Arrival radius in pixels.
    pub tolerance: f32,
    /// Chase speed override; `None` uses the pet's base speed.
    pub speed: Option<f32>,
}

impl FollowTarget {
    /// Build a target, or `None` if the point is not finite.
    pub fn new(x: f32, y: f32, tolerance: f32, speed: Option<f32>) -> Option<Self> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        let tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        Some(Self {
            point: Vec2::new(x, y),
            tolerance,
            speed: speed.filter(|s| s.is_finite() && *s > 0.0),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.point.is_finite()
    }

    pub fn reached(&self, from: Vec2) -> bool {
        from.distance(self.point) <= self.tolerance
    }
}
