use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use sparkpet::toy::{FetchBall, Plate};
use sparkpet::{Mood, Pose};

/// Shader shape selector.
pub const SHAPE_PET: u32 = 0;
pub const SHAPE_PLATE: u32 = 1;
pub const SHAPE_BALL: u32 = 2;

/// Per-instance data uploaded to GPU each frame.
/// Stride = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Screen position of the center (x, y).
    pub position: [f32; 2],
    /// Full size in pixels. Negative width mirrors the sprite.
    pub size: [f32; 2],
    /// RGBA color packed as u32.
    pub color: u32,
    /// Animation frame index.
    pub frame: u32,
    /// Rotation angle in radians (celebration spin).
    pub rotation: f32,
    /// One of the `SHAPE_*` constants.
    pub shape: u32,
}

impl SpriteInstance {
    // Locations 0 and 1 belong to the quad vertex.
    const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x2,
        3 => Float32x2,
        4 => Uint32,
        5 => Uint32,
        6 => Float32,
        7 => Uint32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    pub fn from_pose(pose: &Pose) -> Self {
        let size = pose.bounds.size;
        let width = if pose.facing_left { -size.x } else { size.x };
        Self {
            position: pose.position.into(),
            size: [width, size.y],
            color: mood_color(pose.mood),
            frame: pose.frame as u32,
            rotation: pose.rotation,
            shape: SHAPE_PET,
        }
    }

    pub fn from_plate(plate: &Plate) -> Self {
        Self::prop(plate.pos, plate.size, 0xFFDC32FF, SHAPE_PLATE)
    }

    pub fn from_ball(ball: &FetchBall) -> Self {
        // Armed ball glows green.
        let color = if ball.armed { 0x50E678FF } else { 0xFFE63CFF };
        Self::prop(ball.pos, ball.size, color, SHAPE_BALL)
    }

    fn prop(pos: Vec2, size: Vec2, color: u32, shape: u32) -> Self {
        Self {
            position: pos.into(),
            size: size.into(),
            color,
            frame: 0,
            rotation: 0.0,
            shape,
        }
    }
}

fn mood_color(mood: Mood) -> u32 {
    match mood {
        Mood::Wander => 0x78B4FFFF,    // spark blue
        Mood::Sleep => 0x6670A0FF,     // dim
        Mood::Happy => 0xFFC850FF,     // warm yellow
        Mood::Angry => 0xF04040FF,     // red
        Mood::Celebrate => 0xFF88FFFF, // pink
    }
}
