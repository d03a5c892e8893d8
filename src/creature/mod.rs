//! The pet itself: motion, mood state machine and emotional meters.
//!
//! A host calls [`CreatureController::tick`] once per frame, reads
//! [`CreatureController::pose`] for drawing and forwards input events.
//! Nothing in here touches the clock, the filesystem or the GPU.

pub mod animation;
pub mod celebrate;
pub mod follow;
pub mod meter;
pub mod mood;
pub mod pose;
pub mod steering;

use glam::Vec2;

use crate::config::{ClipConfig, PetConfig};

use self::animation::AnimationState;
use self::celebrate::Celebration;
use self::follow::FollowTarget;
use self::meter::Meter;
use self::mood::MoodState;
use self::steering::Wander;

pub use self::mood::Mood;
pub use self::pose::{Pose, Rect, Viewport};

/// Sprite flips when moving left faster than this (px/s).
const FACING_THRESHOLD: f32 = 6.0;

/// Transient speed/animation boost after a tap.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressState {
    pub active: bool,
    pub remaining: f32,
}

/// Owns one pet: position, velocity, mood, meters and the follow target.
pub struct CreatureController {
    config: PetConfig,
    viewport: Viewport,
    rng: fastrand::Rng,

    pos: Vec2,
    vel: Vec2,
    rotation: f32,
    facing_left: bool,

    state: MoodState,
    anim: AnimationState,
    wander: Wander,

    frustration: Meter,
    happiness: Meter,

    /// Seconds of simulation time since the last qualifying input.
    idle_time: f32,
    press: PressState,
    speed_multiplier: f32,

    follow: Option<FollowTarget>,
    just_arrived: bool,

    bounds: Rect,
}

impl CreatureController {
    pub fn new(position: Vec2, config: PetConfig, viewport: Viewport) -> Self {
        Self::with_rng(position, config, viewport, fastrand::Rng::new())
    }

    /// Deterministic wander for tests and replays.
    pub fn with_seed(position: Vec2, config: PetConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(position, config, viewport, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(
        position: Vec2,
        config: PetConfig,
        viewport: Viewport,
        mut rng: fastrand::Rng,
    ) -> Self {
        let wander = Wander::new(&mut rng);
        let pos = if position.is_finite() {
            position
        } else {
            viewport.size() * 0.5
        };
        let mut pet = Self {
            frustration: Meter::new(config.frustration_decay_interval),
            happiness: Meter::new(config.happiness_decay_interval),
            config,
            viewport,
            rng,
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            facing_left: false,
            state: MoodState::Wander,
            anim: AnimationState::default(),
            wander,
            idle_time: 0.0,
            press: PressState::default(),
            speed_multiplier: 1.0,
            follow: None,
            just_arrived: false,
            bounds: Rect::default(),
        };
        pet.refresh_bounds();
        pet
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Advance the simulation by `dt` seconds. Zero, negative or non-finite
    /// `dt` leaves every bit of state untouched.
    pub fn tick(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.just_arrived = false;
        self.idle_time += dt;

        self.update_press(dt);
        self.decay_meters(dt);

        if self.frustration.is_full() && Mood::Angry.priority() > self.mood().priority() {
            self.enter(MoodState::Angry {
                remaining: self.config.angry_duration,
            });
            self.frustration.set(0.0);
        }

        match self.state {
            MoodState::Celebrate(mut celebration) => {
                let frame = celebration.advance(dt);
                self.pos = frame.position;
                self.rotation = frame.rotation;
                if frame.finished {
                    self.enter(MoodState::Wander);
                } else {
                    self.state = MoodState::Celebrate(celebration);
                    self.animate_clip(dt, self.config.happy);
                }
            }
            MoodState::Happy { remaining } => {
                self.vel = Vec2::ZERO;
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.enter(MoodState::Wander);
                } else {
                    self.state = MoodState::Happy { remaining };
                    self.animate_clip(dt, self.config.happy);
                }
            }
            MoodState::Angry { remaining } => {
                self.vel = Vec2::ZERO;
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.frustration.set(self.config.angry_exit_frustration);
                    self.enter(MoodState::Wander);
                } else {
                    self.state = MoodState::Angry { remaining };
                    self.animate_clip(dt, self.config.angry);
                }
            }
            MoodState::Sleep | MoodState::Wander => {
                if self.idle_time >= self.config.sleep_after {
                    if !matches!(self.state, MoodState::Sleep) {
                        self.enter(MoodState::Sleep);
                    }
                } else if matches!(self.state, MoodState::Sleep) {
                    self.enter(MoodState::Wander);
                }

                if matches!(self.state, MoodState::Sleep) {
                    self.vel = Vec2::ZERO;
                    self.animate_clip(dt, self.config.sleep);
                } else if self.follow.is_some() {
                    self.chase(dt);
                } else {
                    self.roam(dt);
                }
            }
        }

        if self.vel.x < -FACING_THRESHOLD {
            self.facing_left = true;
        } else if self.vel.x > FACING_THRESHOLD {
            self.facing_left = false;
        }
        self.refresh_bounds();
    }

    fn update_press(&mut self, dt: f32) {
        if self.press.remaining <= 0.0 {
            return;
        }
        self.press.remaining -= dt;
        if self.press.remaining <= 0.0 {
            self.clear_press();
        }
    }

    fn clear_press(&mut self) {
        self.press = PressState::default();
        self.speed_multiplier = 1.0;
    }

    fn decay_meters(&mut self, dt: f32) {
        if !self.press.active {
            self.frustration.decay(dt);
        }
        self.happiness.decay(dt);
    }

    /// Autonomous wandering with edge bounces.
    fn roam(&mut self, dt: f32) {
        self.wander.update(dt, &mut self.rng);

        let target = self.wander.direction() * self.config.base_speed * self.speed_multiplier;
        self.vel = steering::smooth_toward(self.vel, target, self.config.smoothness, dt);
        self.vel = steering::clamp_speed(self.vel, self.config.max_speed);
        self.pos += self.vel * dt;

        let half = self.sprite_size() * 0.5;
        steering::collide_with_edges(
            &mut self.pos,
            &mut self.vel,
            &mut self.wander,
            half,
            self.viewport.size(),
            &mut self.rng,
        );

        self.animate_walk(dt);
    }

    /// Seek-and-stop toward the follow target. Edges are not checked while
    /// chasing; whoever placed the target keeps it on screen.
    fn chase(&mut self, dt: f32) {
        let Some(target) = self.follow else {
            return;
        };
        if !target.is_valid() {
            log::warn!("Dropping non-finite follow target {:?}", target.point);
            self.follow = None;
            self.vel = Vec2::ZERO;
            return;
        }

        if target.reached(self.pos) {
            log::debug!("Arrived at follow target {:?}", target.point);
            self.follow = None;
            self.vel = Vec2::ZERO;
            self.just_arrived = true;
            self.animate_walk(dt);
            return;
        }

        let dir = (target.point - self.pos).normalize_or_zero();
        let speed = target.speed.unwrap_or(self.config.base_speed) * self.speed_multiplier;
        self.vel = steering::smooth_toward(self.vel, dir * speed, self.config.smoothness, dt);
        self.vel = steering::clamp_speed(self.vel, self.config.max_speed);
        self.pos += self.vel * dt;

        self.animate_walk(dt);
    }

    fn animate_walk(&mut self, dt: f32) {
        let rate = if self.vel.length() > self.config.moving_threshold {
            1.0
        } else {
            self.config.idle_anim_rate
        };
        let fps = if self.press.active {
            self.config.pressed_fps
        } else {
            self.config.walk.fps
        };
        self.anim
            .advance(dt, rate, fps, self.config.walk.frame_count);
    }

    fn animate_clip(&mut self, dt: f32, clip: ClipConfig) {
        self.anim.advance(dt, 1.0, clip.fps, clip.frame_count);
    }

    fn enter(&mut self, next: MoodState) {
        let from = self.mood();
        let to = next.mood();
        if from != to {
            log::debug!("Mood {} -> {}", from.label(), to.label());
        }
        match next {
            MoodState::Sleep
            | MoodState::Happy { .. }
            | MoodState::Angry { .. }
            | MoodState::Celebrate(_) => {
                self.vel = Vec2::ZERO;
            }
            MoodState::Wander => {}
        }
        if !matches!(next, MoodState::Celebrate(_)) {
            self.rotation = 0.0;
        }
        self.state = next;
        self.anim.reset();
    }

    // -----------------------------------------------------------------------
    // Input events
    // -----------------------------------------------------------------------

    /// Tap on the pet. Returns true if the point hit the pet and the tap was
    /// taken; taps are ignored mid-tantrum and mid-celebration.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> bool {
        if !self.mood().accepts_triggers() {
            return false;
        }
        if !self.bounds.contains(Vec2::new(x, y)) {
            return false;
        }
        self.notify_activity();
        self.press = PressState {
            active: true,
            remaining: self.config.press_duration,
        };
        self.speed_multiplier = self.config.press_boost;
        self.frustration.add(self.config.frustration_per_click);
        true
    }

    /// Any input that should keep the pet awake (keyboard, toy handling).
    pub fn notify_activity(&mut self) {
        self.idle_time = 0.0;
        if matches!(self.state, MoodState::Sleep) {
            self.enter(MoodState::Wander);
        }
    }

    /// Food arrived: raise happiness and play the happy loop.
    pub fn feed(&mut self) -> bool {
        if !self.mood().accepts_triggers() {
            log::debug!("Ignoring feed while {}", self.mood().label());
            return false;
        }
        self.notify_activity();
        self.happiness.add(self.config.feed_happiness);
        self.start_happy();
        true
    }

    /// Play the happy loop once without touching the meters.
    pub fn trigger_happy_once(&mut self) -> bool {
        if !self.mood().accepts_triggers() {
            log::debug!("Ignoring happy cue while {}", self.mood().label());
            return false;
        }
        self.start_happy();
        true
    }

    fn start_happy(&mut self) {
        self.clear_press();
        self.enter(MoodState::Happy {
            remaining: self.config.happy.loop_duration(),
        });
    }

    /// Jump `peak` pixels and spin `rotations` turns over `duration` seconds,
    /// landing exactly where the jump started. Cannot be interrupted.
    pub fn celebrate(&mut self, duration: f32, peak: f32, rotations: f32) -> bool {
        if !self.mood().accepts_triggers() {
            log::debug!("Ignoring celebrate while {}", self.mood().label());
            return false;
        }
        if !(duration.is_finite() && duration > 0.0 && peak.is_finite() && rotations.is_finite())
        {
            return false;
        }
        self.enter(MoodState::Celebrate(Celebration::new(
            self.pos, duration, peak, rotations,
        )));
        true
    }

    /// Chase a point instead of wandering. Replaces any current target.
    /// Non-finite coordinates clear the target and return false.
    pub fn request_follow(
        &mut self,
        x: f32,
        y: f32,
        tolerance: Option<f32>,
        speed: Option<f32>,
    ) -> bool {
        let tolerance = tolerance.unwrap_or(self.config.follow_tolerance);
        match FollowTarget::new(x, y, tolerance, speed) {
            Some(target) => {
                self.follow = Some(target);
                self.notify_activity();
                true
            }
            None => {
                log::warn!("Rejected follow target ({x}, {y})");
                self.follow = None;
                false
            }
        }
    }

    pub fn cancel_follow(&mut self) {
        self.follow = None;
    }

    /// Host resized the drawable area. An empty viewport is ignored so the
    /// pet keeps its place while the window is minimised.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        self.refresh_bounds();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn pose(&self) -> Pose {
        Pose {
            mood: self.mood(),
            position: self.pos,
            rotation: self.rotation,
            frame: self.anim.frame,
            bounds: self.bounds,
            facing_left: self.facing_left,
        }
    }

    pub fn mood(&self) -> Mood {
        self.state.mood()
    }

    pub fn frustration(&self) -> f32 {
        self.frustration.value()
    }

    pub fn happiness(&self) -> f32 {
        self.happiness.value()
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn is_following(&self) -> bool {
        self.follow.is_some()
    }

    /// True for exactly one tick after the pet reached its follow target.
    pub fn just_arrived(&self) -> bool {
        self.just_arrived
    }

    pub fn press_state(&self) -> PressState {
        self.press
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn config(&self) -> &PetConfig {
        &self.config
    }

    /// Clip whose frames are on screen right now.
    pub fn current_clip(&self) -> &ClipConfig {
        match self.state {
            MoodState::Wander => &self.config.walk,
            MoodState::Sleep => &self.config.sleep,
            MoodState::Happy { .. } | MoodState::Celebrate(_) => &self.config.happy,
            MoodState::Angry { .. } => &self.config.angry,
        }
    }

    /// On-screen sprite size for the current clip.
    pub fn sprite_size(&self) -> Vec2 {
        pose::sprite_size(&self.config, self.current_clip(), self.viewport)
    }

    fn refresh_bounds(&mut self) {
        self.bounds = Rect::from_center(self.pos, self.sprite_size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn pet_at(x: f32, y: f32) -> CreatureController {
        CreatureController::with_seed(
            Vec2::new(x, y),
            PetConfig::default(),
            Viewport::new(1280.0, 720.0),
            42,
        )
    }

    fn tap(pet: &mut CreatureController) -> bool {
        let c = pet.pose().bounds.center();
        pet.on_pointer_down(c.x, c.y)
    }

    #[test]
    fn meters_stay_in_range() {
        let mut pet = pet_at(640.0, 360.0);
        for i in 0..4000 {
            if i % 7 == 0 {
                tap(&mut pet);
            }
            if i % 300 == 0 {
                pet.feed();
            }
            pet.tick(DT * (1 + i % 5) as f32);
            assert!((0.0..=100.0).contains(&pet.frustration()));
            assert!((0.0..=100.0).contains(&pet.happiness()));
        }
    }

    #[test]
    fn zero_tick_changes_nothing() {
        let mut pet = pet_at(640.0, 360.0);
        for _ in 0..30 {
            pet.tick(DT);
        }
        tap(&mut pet);
        let pose = pet.pose();
        let vel = pet.velocity();
        let frustration = pet.frustration();
        let press = pet.press_state();
        let turn_timer = pet.wander.timer;
        for _ in 0..100 {
            pet.tick(0.0);
            pet.tick(-1.0);
            pet.tick(f32::NAN);
        }
        assert_eq!(pet.pose(), pose);
        assert_eq!(pet.velocity(), vel);
        assert_eq!(pet.frustration(), frustration);
        assert_eq!(pet.press_state().remaining, press.remaining);
        assert_eq!(pet.wander.timer, turn_timer);
    }

    #[test]
    fn falls_asleep_and_wakes() {
        let mut pet = pet_at(640.0, 360.0);
        for _ in 0..(31 * 60) {
            pet.tick(DT);
        }
        assert_eq!(pet.mood(), Mood::Sleep);
        assert_eq!(pet.velocity(), Vec2::ZERO);

        let parked = pet.position();
        pet.tick(DT);
        assert_eq!(pet.position(), parked);

        pet.notify_activity();
        pet.tick(DT);
        assert_eq!(pet.mood(), Mood::Wander);
    }

    #[test]
    fn tap_wakes_sleeper() {
        let mut pet = pet_at(640.0, 360.0);
        pet.tick(31.0);
        assert_eq!(pet.mood(), Mood::Sleep);
        assert!(tap(&mut pet));
        assert_eq!(pet.mood(), Mood::Wander);
    }

    #[test]
    fn ten_taps_cause_tantrum() {
        let mut pet = pet_at(640.0, 360.0);
        for _ in 0..10 {
            assert!(tap(&mut pet));
        }
        assert_eq!(pet.frustration(), 100.0);

        pet.tick(DT);
        assert_eq!(pet.mood(), Mood::Angry);
        assert_eq!(pet.frustration(), 0.0);
        assert_eq!(pet.velocity(), Vec2::ZERO);

        // Taps and triggers bounce off while angry.
        assert!(!tap(&mut pet));
        assert!(!pet.feed());
        assert!(!pet.trigger_happy_once());
        assert!(!pet.celebrate(1.0, 50.0, 1.0));

        let spot = pet.position();
        let mut elapsed = DT;
        while pet.mood() == Mood::Angry {
            pet.tick(DT);
            elapsed += DT;
            assert_eq!(pet.position(), spot);
            assert!(elapsed < 10.5, "tantrum overran");
        }
        assert!(elapsed >= 10.0 - 1e-3);
        assert_eq!(pet.mood(), Mood::Wander);
        assert_eq!(pet.frustration(), 50.0);
    }

    #[test]
    fn frustration_decays_only_when_released() {
        let mut pet = pet_at(640.0, 360.0);
        tap(&mut pet);
        assert_eq!(pet.frustration(), 10.0);
        // Still pressed for 0.7s; no decay while pressed.
        pet.tick(0.5);
        assert!(pet.press_state().active);
        assert_eq!(pet.frustration(), 10.0);
        pet.tick(0.5);
        assert!(!pet.press_state().active);
        assert_eq!(pet.speed_multiplier(), 1.0);
        pet.tick(3.0);
        assert_eq!(pet.frustration(), 9.0);
    }

    #[test]
    fn frustration_decays_while_asleep() {
        let mut pet = pet_at(640.0, 360.0);
        pet.frustration.set(20.0);
        pet.tick(31.0);
        assert_eq!(pet.mood(), Mood::Sleep);
        let before = pet.frustration();
        pet.tick(6.0);
        assert_eq!(pet.mood(), Mood::Sleep);
        assert_eq!(pet.frustration(), before - 2.0);
    }

    #[test]
    fn happiness_decays_every_two_seconds() {
        let mut pet = pet_at(640.0, 360.0);
        assert!(pet.feed());
        assert_eq!(pet.happiness(), 15.0);
        pet.tick(4.5);
        assert_eq!(pet.happiness(), 13.0);
    }

    #[test]
    fn happy_plays_once_then_wanders() {
        let mut pet = pet_at(640.0, 360.0);
        pet.vel = Vec2::new(100.0, 0.0);
        assert!(pet.trigger_happy_once());
        assert_eq!(pet.mood(), Mood::Happy);
        assert_eq!(pet.velocity(), Vec2::ZERO);
        assert_eq!(pet.happiness(), 0.0);

        let duration = pet.config().happy.loop_duration();
        let mut elapsed = 0.0;
        while pet.mood() == Mood::Happy {
            pet.tick(DT);
            elapsed += DT;
            assert!(elapsed <= duration + DT * 2.0);
        }
        assert!(elapsed >= duration - DT);
        assert_eq!(pet.mood(), Mood::Wander);
    }

    #[test]
    fn happy_outranks_pending_tantrum() {
        let mut pet = pet_at(640.0, 360.0);
        assert!(pet.feed());
        for _ in 0..10 {
            tap(&mut pet);
        }
        pet.tick(DT);
        assert_eq!(pet.mood(), Mood::Happy);
        while pet.mood() == Mood::Happy {
            pet.tick(DT);
        }
        pet.tick(DT);
        assert_eq!(pet.mood(), Mood::Angry);
    }

    #[test]
    fn celebrate_lands_on_start() {
        let mut pet = pet_at(100.0, 200.0);
        assert!(pet.celebrate(2.0, 120.0, 2.0));
        assert!(!pet.celebrate(2.0, 120.0, 2.0));
        assert!(!pet.feed());

        let mut elapsed = 0.0;
        let mut rose = false;
        while elapsed < 2.0 {
            pet.tick(0.013);
            elapsed += 0.013;
            rose |= pet.position().y < 150.0;
        }
        assert!(rose);
        assert_eq!(pet.mood(), Mood::Wander);
        assert_eq!(pet.position(), Vec2::new(100.0, 200.0));
        assert_eq!(pet.pose().rotation, 0.0);
    }

    #[test]
    fn celebrate_rejects_bad_arguments() {
        let mut pet = pet_at(100.0, 200.0);
        assert!(!pet.celebrate(0.0, 10.0, 1.0));
        assert!(!pet.celebrate(f32::NAN, 10.0, 1.0));
        assert_eq!(pet.mood(), Mood::Wander);
    }

    #[test]
    fn follow_target_arrival() {
        let mut pet = pet_at(100.0, 100.0);
        assert!(pet.request_follow(500.0, 500.0, Some(14.0), None));
        assert!(pet.is_following());

        let mut arrived = false;
        for _ in 0..(20 * 60) {
            pet.tick(DT);
            if pet.just_arrived() {
                arrived = true;
                break;
            }
            assert!(pet.is_following());
        }
        assert!(arrived);
        assert!(!pet.is_following());
        assert_eq!(pet.velocity(), Vec2::ZERO);
        assert!(pet.position().distance(Vec2::new(500.0, 500.0)) <= 14.0);

        pet.tick(DT);
        assert!(!pet.just_arrived());
    }

    #[test]
    fn bad_follow_target_is_cleared() {
        let mut pet = pet_at(100.0, 100.0);
        assert!(pet.request_follow(300.0, 300.0, None, Some(90.0)));
        assert!(!pet.request_follow(f32::NAN, 300.0, None, None));
        assert!(!pet.is_following());
        pet.tick(DT);
        assert!(pet.position().is_finite());
    }

    #[test]
    fn cancel_follow_resumes_wander() {
        let mut pet = pet_at(100.0, 100.0);
        pet.request_follow(900.0, 100.0, None, None);
        pet.tick(DT);
        pet.cancel_follow();
        assert!(!pet.is_following());
        pet.tick(DT);
        assert!(!pet.just_arrived());
    }

    #[test]
    fn bounces_off_left_edge() {
        let mut pet = pet_at(640.0, 360.0);
        let half = pet.sprite_size() * 0.5;
        let speed = pet.config().base_speed;
        pet.pos = Vec2::new(half.x + 1.0, 360.0);
        pet.vel = Vec2::new(-speed, 0.0);
        pet.wander.heading = std::f32::consts::PI;
        pet.wander.timer = 0.0;
        pet.wander.interval = 10.0;

        pet.tick(DT);
        assert_eq!(pet.position().x, half.x);
        assert!((pet.velocity().x - 0.6 * speed).abs() < 1.0);

        for _ in 0..600 {
            pet.tick(DT);
            assert!(pet.position().x >= half.x);
        }
    }

    #[test]
    fn minimised_window_keeps_position() {
        let mut pet = pet_at(640.0, 360.0);
        pet.tick(DT);
        let before = pet.position();

        pet.set_viewport(Viewport::new(0.0, 0.0));
        pet.tick(DT);
        pet.set_viewport(Viewport::new(1280.0, 720.0));
        pet.tick(DT);

        assert!(pet.position().distance(before) < 20.0);
        assert!(pet.pose().bounds.contains(before));
    }

    #[test]
    fn stays_on_screen_while_wandering() {
        let mut pet = pet_at(640.0, 360.0);
        for i in 0..(25 * 60) {
            if i % 40 == 0 {
                pet.notify_activity();
            }
            pet.tick(DT);
            let b = pet.pose().bounds;
            assert!(b.min.x >= -1e-3 && b.min.y >= -1e-3);
            assert!(b.max().x <= 1280.0 + 1e-3 && b.max().y <= 720.0 + 1e-3);
        }
    }

    #[test]
    fn tap_boosts_speed() {
        let mut pet = pet_at(640.0, 360.0);
        assert!(tap(&mut pet));
        assert!((pet.speed_multiplier() - 2.2).abs() < 1e-6);
        pet.tick(0.8);
        assert_eq!(pet.speed_multiplier(), 1.0);
    }

    #[test]
    fn miss_does_nothing() {
        let mut pet = pet_at(640.0, 360.0);
        assert!(!pet.on_pointer_down(5.0, 5.0));
        assert_eq!(pet.frustration(), 0.0);
        assert!(!pet.press_state().active);
    }

    #[test]
    fn empty_clips_do_not_panic() {
        let mut config = PetConfig::default();
        config.walk.frame_count = 0;
        config.sleep.frame_count = 0;
        config.happy.frame_count = 0;
        let mut pet =
            CreatureController::with_seed(Vec2::new(300.0, 300.0), config, Viewport::new(800.0, 600.0), 9);
        for _ in 0..120 {
            pet.tick(DT);
            assert_eq!(pet.pose().frame, 0);
        }
        assert!(pet.trigger_happy_once());
        pet.tick(DT);
        assert_eq!(pet.pose().frame, 0);
    }

    #[test]
    fn mood_entry_resets_animation() {
        let mut pet = pet_at(640.0, 360.0);
        for _ in 0..50 {
            pet.tick(DT);
        }
        pet.trigger_happy_once();
        assert_eq!(pet.pose().frame, 0);
        assert_eq!(pet.anim.elapsed, 0.0);
    }

    #[test]
    fn faces_direction_of_travel() {
        let mut pet = pet_at(640.0, 360.0);
        pet.request_follow(100.0, 360.0, None, None);
        for _ in 0..30 {
            pet.tick(DT);
        }
        assert!(pet.pose().facing_left);
    }
}
