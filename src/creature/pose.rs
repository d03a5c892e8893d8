use glam::Vec2;

use super::mood::Mood;
use crate::config::{ClipConfig, PetConfig};

/// Drawable area in pixels, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// A minimised window reports zero on either axis.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        !(self.min.x > b_max.x
            || a_max.x < other.min.x
            || self.min.y > b_max.y
            || a_max.y < other.min.y)
    }
}

/// Read-only snapshot the renderer draws each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub mood: Mood,
    pub position: Vec2,
    /// Radians, clockwise. Non-zero only mid-celebration.
    pub rotation: f32,
    pub frame: usize,
    pub bounds: Rect,
    pub facing_left: bool,
}

/// On-screen size of a clip's frame: native size scaled to fit a fraction of
/// the viewport (never upscaled past `max_upscale`), then by `display_scale`.
pub fn sprite_size(config: &PetConfig, clip: &ClipConfig, viewport: Viewport) -> Vec2 {
    let iw = positive_or(clip.frame_width, 100.0);
    let ih = positive_or(clip.frame_height, 100.0);
    let max_w = viewport.width * config.fit_width_fraction;
    let max_h = viewport.height * config.fit_height_fraction;
    let fit = (max_w / iw).min(max_h / ih).min(config.max_upscale).max(0.0);
    Vec2::new(iw, ih) * fit * config.display_scale
}

fn positive_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect::from_center(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert!(r.contains(Vec2::new(40.0, 45.0)));
        assert!(r.contains(Vec2::new(60.0, 55.0)));
        assert!(!r.contains(Vec2::new(60.1, 50.0)));
    }

    #[test]
    fn rect_overlap() {
        let a = Rect::from_center(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::from_center(Vec2::new(9.0, 0.0), Vec2::splat(10.0));
        let c = Rect::from_center(Vec2::new(30.0, 0.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn small_frames_cap_at_max_upscale() {
        let config = PetConfig::default();
        let clip = ClipConfig::new(1, 12.0);
        let size = sprite_size(&config, &clip, Viewport::new(4000.0, 4000.0));
        let expected = 100.0 * config.max_upscale * config.display_scale;
        assert!((size.x - expected).abs() < 1e-3);
    }

    #[test]
    fn large_frames_fit_viewport_height() {
        let config = PetConfig::default();
        let mut clip = ClipConfig::new(1, 12.0);
        clip.frame_width = 1000.0;
        clip.frame_height = 1000.0;
        let size = sprite_size(&config, &clip, Viewport::new(1000.0, 400.0));
        // Height-limited: 400 * 0.35 = 140 before display scale.
        assert!((size.y - 140.0 * config.display_scale).abs() < 1e-3);
    }
}
