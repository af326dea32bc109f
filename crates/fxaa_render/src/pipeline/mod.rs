//! Rendering pipeline components
//!
//! Three passes make up a frame: the lit scene pass into an offscreen
//! target, the FXAA pass from that target into a second one, and the
//! composite pass that presents both halves on the swapchain.

pub mod types;
pub mod scene_pipeline;
pub mod fxaa_pipeline;
pub mod composite_pipeline;

// Re-export types
pub use types::{BoxVertex, CompositeUniforms, FxaaUniforms, PistonInstance, SceneUniforms};

// Re-export pipelines
pub use scene_pipeline::ScenePipeline;
pub use fxaa_pipeline::{FxaaError, FxaaPipeline, FxaaSettings};
pub use composite_pipeline::CompositePipeline;
