//! FXAA comparison demo
//!
//! Renders an animated piston scene offscreen, runs FXAA over it and shows
//! the filtered and raw images either side of a draggable divider.

pub mod config;
pub mod input;
pub mod systems;
