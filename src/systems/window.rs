//! Window management system
//!
//! Handles window creation and title updates.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Window width in physical pixels
    pub fn width(&self) -> u32 {
        self.window.inner_size().width
    }

    /// Update window title with frame rate and state info
    pub fn update_title(&self, fps: f32, paused: bool, vsync: bool) {
        self.window.set_title(&format_title(&self.base_title, fps, paused, vsync));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Build the window title shown while running
pub fn format_title(base: &str, fps: f32, paused: bool, vsync: bool) -> String {
    let mut title = format!(
        "{} - {:.1} fps [vsync {}]",
        base,
        fps,
        if vsync { "on" } else { "off" }
    );
    if paused {
        title.push_str(" [paused]");
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
