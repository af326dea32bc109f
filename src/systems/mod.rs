//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod animation;
mod frame_stats;
mod render;
mod window;

pub use animation::{orbit_eye, AnimationClock, AnimationSystem};
pub use frame_stats::FrameStats;
pub use render::{RenderError, RenderSystem};
pub use window::{format_title, WindowError, WindowSystem};
