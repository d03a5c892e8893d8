use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Probability that a wander turn picks a brand-new heading.
const FULL_TURN_CHANCE: f32 = 0.14;
/// Max heading change for an ordinary wander turn (±60°).
const SMALL_TURN: f32 = PI / 3.0;
/// Heading jitter added after bouncing off an edge.
const BOUNCE_JITTER: f32 = 0.25;
/// Speed kept by the velocity component that hit the wall.
const BOUNCE_RESTITUTION: f32 = 0.6;
/// Damping of the other velocity component on a bounce.
const BOUNCE_TANGENT_DAMP: f32 = 0.8;

/// Interval window before the first wander turn.
pub const FIRST_TURN_WINDOW: (f32, f32) = (0.6, 2.2);
/// Interval window after an ordinary turn.
pub const TURN_WINDOW: (f32, f32) = (0.8, 2.5);
/// Shorter window after a bounce so the pet doesn't hug the wall.
pub const BOUNCE_TURN_WINDOW: (f32, f32) = (0.8, 1.6);

pub fn uniform(rng: &mut fastrand::Rng, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.f32() * (hi - lo)
}

/// Wander heading timer: fires every `interval` seconds and turns the pet.
#[derive(Debug, Clone, Copy)]
pub struct Wander {
    pub heading: f32,
    pub timer: f32,
    pub interval: f32,
}

impl Wander {
    pub fn new(rng: &mut fastrand::Rng) -> Self {
        Self {
            heading: rng.f32() * TAU,
            timer: 0.0,
            interval: uniform(rng, FIRST_TURN_WINDOW),
        }
    }

    pub fn update(&mut self, dt: f32, rng: &mut fastrand::Rng) {
        self.timer += dt;
        if self.timer < self.interval {
            return;
        }
        self.timer = 0.0;
        self.interval = uniform(rng, TURN_WINDOW);
        if rng.f32() < FULL_TURN_CHANCE {
            self.heading = rng.f32() * TAU;
        } else {
            self.heading += uniform(rng, (-SMALL_TURN, SMALL_TURN));
        }
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin())
    }

    /// Re-aim after a bounce and restart the timer with the short window.
    fn after_bounce(&mut self, rng: &mut fastrand::Rng) {
        self.heading += uniform(rng, (-BOUNCE_JITTER, BOUNCE_JITTER));
        self.timer = 0.0;
        self.interval = uniform(rng, BOUNCE_TURN_WINDOW);
    }
}

/// Exponential low-pass toward `target`: `v += (target - v) * (1 - e^{-k dt})`.
pub fn smooth_toward(vel: Vec2, target: Vec2, smoothness: f32, dt: f32) -> Vec2 {
    let t = 1.0 - (-smoothness * dt).exp();
    vel + (target - vel) * t
}

/// Uniformly rescale so the speed never exceeds `max_speed`.
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed && speed > 0.0 {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Keep the sprite fully on screen, reflecting off any edge it touched.
/// Returns true if a bounce happened.
pub fn collide_with_edges(
    pos: &mut Vec2,
    vel: &mut Vec2,
    wander: &mut Wander,
    half: Vec2,
    screen: Vec2,
    rng: &mut fastrand::Rng,
) -> bool {
    let mut bounced = false;

    let (left, right) = axis_limits(half.x, screen.x);
    if pos.x < left {
        pos.x = left;
        vel.x = vel.x.abs() * BOUNCE_RESTITUTION;
        vel.y *= BOUNCE_TANGENT_DAMP;
        wander.heading = PI - wander.heading;
        bounced = true;
    } else if pos.x > right {
        pos.x = right;
        vel.x = -vel.x.abs() * BOUNCE_RESTITUTION;
        vel.y *= BOUNCE_TANGENT_DAMP;
        wander.heading = PI - wander.heading;
        bounced = true;
    }

    let (top, bottom) = axis_limits(half.y, screen.y);
    if pos.y < top {
        pos.y = top;
        vel.y = vel.y.abs() * BOUNCE_RESTITUTION;
        vel.x *= BOUNCE_TANGENT_DAMP;
        wander.heading = -wander.heading;
        bounced = true;
    } else if pos.y > bottom {
        pos.y = bottom;
        vel.y = -vel.y.abs() * BOUNCE_RESTITUTION;
        vel.x *= BOUNCE_TANGENT_DAMP;
        wander.heading = -wander.heading;
        bounced = true;
    }

    if bounced {
        wander.after_bounce(rng);
    }
    bounced
}

/// Allowed center range on one axis. A sprite wider than the screen is pinned to the middle.
fn axis_limits(half: f32, extent: f32) -> (f32, f32) {
    if extent <= half * 2.0 {
        let mid = extent * 0.5;
        (mid, mid)
    } else {
        (half, extent - half)
    }
}
