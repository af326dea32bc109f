//! Input handling for the FXAA comparison view
//!
//! This crate turns raw mouse input into the position of the divider that
//! separates the anti-aliased and raw halves of the screen.

mod divider_controller;

pub use divider_controller::DividerController;
