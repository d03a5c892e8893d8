use glam::Vec2;

use crate::creature::{CreatureController, Rect, Viewport};

// ---------------------------------------------------------------------------
// Food plate
// ---------------------------------------------------------------------------

/// Gap between the parked plate and the right/bottom edges.
const PLATE_MARGIN: f32 = 32.0;
/// Extra lift above the bottom edge.
const PLATE_LIFT: f32 = 12.0;
/// Plate size relative to one native pet frame.
const PLATE_SCALE: f32 = 0.65;
const PLATE_MIN_SIZE: Vec2 = Vec2::new(48.0, 36.0);
/// Fraction of the pet's sprite size that counts as "touching" the plate.
const PLATE_REACH: f32 = 0.45;

/// A food plate the user drags onto the pet to feed it.
#[derive(Debug, Clone, Copy)]
pub struct Plate {
    pub pos: Vec2,
    pub home: Vec2,
    pub size: Vec2,
    pub held: bool,
    grab_offset: Vec2,
    /// One meal per grab.
    fed_this_grab: bool,
}

impl Plate {
    /// `pet_frame` is the native size of one pet frame; the plate is sized from it.
    pub fn new(pet_frame: Vec2, viewport: Viewport) -> Self {
        let size = (pet_frame * PLATE_SCALE).round().max(PLATE_MIN_SIZE);
        let mut plate = Self {
            pos: Vec2::ZERO,
            home: Vec2::ZERO,
            size,
            held: false,
            grab_offset: Vec2::ZERO,
            fed_this_grab: false,
        };
        plate.relayout(viewport);
        plate.pos = plate.home;
        plate
    }

    /// Park position near the bottom-right corner.
    pub fn relayout(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.home = Vec2::new(
            (viewport.width - PLATE_MARGIN - self.size.x * 0.5).round(),
            (viewport.height - PLATE_MARGIN - self.size.y * 0.5 - PLATE_LIFT).round(),
        );
        if !self.held {
            self.pos = self.clamped(self.pos, viewport);
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Grab the plate if the pointer is on it.
    pub fn pointer_down(&mut self, p: Vec2, pet: &mut CreatureController) -> bool {
        if !self.rect().contains(p) {
            return false;
        }
        self.held = true;
        self.grab_offset = p - self.pos;
        self.fed_this_grab = false;
        pet.notify_activity();
        true
    }

    /// Drag the held plate; feeds the pet the moment it touches.
    pub fn pointer_moved(
        &mut self,
        p: Vec2,
        viewport: Viewport,
        pet: &mut CreatureController,
    ) -> bool {
        if !self.held {
            return false;
        }
        self.pos = self.clamped(p - self.grab_offset, viewport);
        if !self.fed_this_grab && self.touches(pet) {
            self.serve(pet);
        }
        true
    }

    /// Drop the plate; feeds the pet if it was dropped on it.
    pub fn pointer_up(&mut self, pet: &mut CreatureController) -> bool {
        if !self.held {
            return false;
        }
        if !self.fed_this_grab && self.touches(pet) {
            self.serve(pet);
        }
        self.held = false;
        true
    }

    fn serve(&mut self, pet: &mut CreatureController) {
        if !pet.feed() {
            return;
        }
        log::info!("Plate served, happiness now {:.0}", pet.happiness());
        self.pos = self.home;
        self.held = false;
        self.fed_this_grab = true;
    }

    /// Center-distance test against the pet's on-screen size.
    fn touches(&self, pet: &CreatureController) -> bool {
        let pet_size = pet.sprite_size().max_element();
        let reach = self.size.max_element() * 0.5 + pet_size * PLATE_REACH;
        self.pos.distance(pet.position()) <= reach
    }

    fn clamped(&self, p: Vec2, viewport: Viewport) -> Vec2 {
        let half = self.size * 0.5;
        let max = (viewport.size() - half).max(half);
        p.clamp(half, max)
    }
}

// ---------------------------------------------------------------------------
// Fetch ball
// ---------------------------------------------------------------------------

const BALL_SIZE: f32 = 84.0;
/// Ball parks this far up from the bottom edge (plus its own height).
const BALL_LIFT: f32 = 26.0;
/// How close the pet must get to a fetch spot.
const FETCH_TOLERANCE: f32 = 14.0;

/// Click the ball to arm it, then click anywhere to send the pet there.
#[derive(Debug, Clone, Copy)]
pub struct FetchBall {
    pub pos: Vec2,
    pub size: Vec2,
    pub armed: bool,
}

impl FetchBall {
    pub fn new(viewport: Viewport) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(BALL_SIZE),
            armed: false,
        };
        ball.relayout(viewport);
        ball
    }

    /// Park near the bottom-left corner.
    pub fn relayout(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.pos = Vec2::new(
            (viewport.width * 0.1).round(),
            (viewport.height - self.size.y - BALL_LIFT).round(),
        );
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Returns true if the click was consumed by the ball.
    pub fn pointer_down(&mut self, p: Vec2, pet: &mut CreatureController) -> bool {
        if self.rect().contains(p) {
            self.armed = true;
            pet.notify_activity();
            log::debug!("Ball armed");
            return true;
        }
        if !self.armed {
            return false;
        }
        self.armed = false;
        if pet.request_follow(p.x, p.y, Some(FETCH_TOLERANCE), None) {
            log::debug!("Fetch target set to ({:.0}, {:.0})", p.x, p.y);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PetConfig;
    use crate::creature::Mood;

    fn setup() -> (CreatureController, Viewport) {
        let viewport = Viewport::new(1280.0, 720.0);
        let pet = CreatureController::with_seed(
            Vec2::new(640.0, 360.0),
            PetConfig::default(),
            viewport,
            11,
        );
        (pet, viewport)
    }

    #[test]
    fn plate_parks_bottom_right() {
        let (_, viewport) = setup();
        let plate = Plate::new(Vec2::new(100.0, 100.0), viewport);
        assert_eq!(plate.size, Vec2::new(65.0, 65.0));
        assert!(plate.rect().max().x <= viewport.width);
        assert!(plate.rect().max().y <= viewport.height);
        assert!(plate.pos.x > viewport.width * 0.5);
    }

    #[test]
    fn tiny_frames_get_minimum_plate() {
        let (_, viewport) = setup();
        let plate = Plate::new(Vec2::new(10.0, 10.0), viewport);
        assert_eq!(plate.size, PLATE_MIN_SIZE);
    }

    #[test]
    fn dragging_plate_onto_pet_feeds_once() {
        let (mut pet, viewport) = setup();
        let mut plate = Plate::new(Vec2::new(100.0, 100.0), viewport);

        assert!(plate.pointer_down(plate.pos, &mut pet));
        assert!(plate.held);

        let target = pet.position();
        assert!(plate.pointer_moved(target, viewport, &mut pet));
        assert_eq!(pet.mood(), Mood::Happy);
        assert_eq!(pet.happiness(), 15.0);
        assert!(!plate.held);
        assert_eq!(plate.pos, plate.home);

        // Further drags and the release do nothing more this grab.
        assert!(!plate.pointer_moved(target, viewport, &mut pet));
        assert!(!plate.pointer_up(&mut pet));
        assert_eq!(pet.happiness(), 15.0);
    }

    #[test]
    fn release_far_away_just_drops() {
        let (mut pet, viewport) = setup();
        let mut plate = Plate::new(Vec2::new(100.0, 100.0), viewport);
        assert!(plate.pointer_down(plate.pos, &mut pet));
        plate.pointer_moved(Vec2::new(60.0, 60.0), viewport, &mut pet);
        assert!(plate.pointer_up(&mut pet));
        assert!(!plate.held);
        assert_eq!(pet.happiness(), 0.0);
        assert_eq!(pet.mood(), Mood::Wander);
    }

    #[test]
    fn plate_is_kept_on_screen() {
        let (mut pet, viewport) = setup();
        let mut plate = Plate::new(Vec2::new(100.0, 100.0), viewport);
        plate.pointer_down(plate.pos, &mut pet);
        plate.pointer_moved(Vec2::new(5000.0, -300.0), viewport, &mut pet);
        let r = plate.rect();
        assert!(r.min.y >= 0.0);
        assert!(r.max().x <= viewport.width);
    }

    #[test]
    fn empty_viewport_keeps_toys_parked() {
        let (_, viewport) = setup();
        let mut plate = Plate::new(Vec2::new(100.0, 100.0), viewport);
        let mut ball = FetchBall::new(viewport);
        let (plate_pos, ball_pos) = (plate.pos, ball.pos);

        plate.relayout(Viewport::new(0.0, 0.0));
        ball.relayout(Viewport::new(0.0, 0.0));
        assert_eq!(plate.pos, plate_pos);
        assert_eq!(plate.home, plate_pos);
        assert_eq!(ball.pos, ball_pos);
    }

    #[test]
    fn miss_leaves_plate_alone() {
        let (mut pet, viewport) = setup();
        let mut plate = Plate::new(Vec2::new(100.0, 100.0), viewport);
        assert!(!plate.pointer_down(Vec2::new(1.0, 1.0), &mut pet));
        assert!(!plate.held);
    }

    #[test]
    fn ball_arms_then_sends_pet() {
        let (mut pet, viewport) = setup();
        let mut ball = FetchBall::new(viewport);

        assert!(!ball.pointer_down(Vec2::new(900.0, 100.0), &mut pet));
        assert!(!pet.is_following());

        assert!(ball.pointer_down(ball.pos, &mut pet));
        assert!(ball.armed);

        assert!(ball.pointer_down(Vec2::new(900.0, 100.0), &mut pet));
        assert!(!ball.armed);
        assert!(pet.is_following());

        for _ in 0..600 {
            pet.tick(1.0 / 60.0);
            if pet.just_arrived() {
                break;
            }
        }
        assert!(pet.position().distance(Vec2::new(900.0, 100.0)) <= FETCH_TOLERANCE);
    }
}
