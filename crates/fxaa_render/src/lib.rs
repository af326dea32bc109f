//! FXAA comparison rendering library
//!
//! This crate provides the wgpu-based pieces of the demo: an animated piston
//! scene rendered offscreen, an FXAA post-process pass, and a compositor that
//! shows the filtered and raw images side by side.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::PerspectiveCamera`] - look-at camera with perspective projection
//! - [`target::RenderTarget`] - offscreen color (+ depth) framebuffer
//! - [`texture::Texture`] - image file to GPU texture loading
//! - [`pistons::Pistons`] - the animated piston scene
//! - [`pipeline::FxaaPipeline`] - fast approximate anti-aliasing filter
//! - [`pipeline::CompositePipeline`] - split-screen presentation

pub mod context;
pub mod camera;
pub mod geometry;
pub mod pipeline;
pub mod pistons;
pub mod target;
pub mod texture;

pub use camera::PerspectiveCamera;
pub use context::{ContextError, RenderContext};
pub use pipeline::{CompositePipeline, FxaaError, FxaaPipeline, FxaaSettings};
pub use pistons::{Pistons, PistonField, PistonsSettings};
pub use target::RenderTarget;
pub use texture::{Texture, TextureError};
