//! SparkPet - an on-screen virtual pet.
//!
//! The [`creature`] module is the whole brain; [`toy`] holds the little props
//! the user plays with. Rendering and windowing live in the binary.

pub mod config;
pub mod creature;
pub mod toy;

pub use config::{ClipConfig, ConfigError, PetConfig};
pub use creature::{CreatureController, Mood, Pose, Rect, Viewport};
