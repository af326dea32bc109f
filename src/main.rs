//! FXAA - side-by-side anti-aliasing comparison
//!
//! Controls:
//! - Drag with any mouse button held: move the divider
//! - Space: pause/resume the animation
//! - V: toggle vertical sync
//! - Escape: quit

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use fxaa_demo::config::AppConfig;
use fxaa_demo::input::{InputAction, InputMapper};
use fxaa_demo::systems::{AnimationSystem, FrameStats, RenderError, RenderSystem, WindowSystem};
use fxaa_input::DividerController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: AnimationSystem,
    divider: DividerController,
    stats: FrameStats,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let animation = AnimationSystem::new(config.camera.clone());
        let divider = DividerController::new(config.window.width);

        Self {
            config,
            window: None,
            render: None,
            animation,
            divider,
            stats: FrameStats::default(),
        }
    }

    /// Create the window and GPU resources
    fn setup(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(window.window().clone(), &self.config)?;

        // Start the comparison in the middle and the animation at zero
        self.divider.reset(window.width());
        self.animation = AnimationSystem::new(self.config.camera.clone());

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleAnimation => {
                let paused = self.animation.toggle_pause();
                log::info!("Animation {}", if paused { "paused" } else { "resumed" });
            }
            InputAction::ToggleVsync => {
                if let Some(render) = &mut self.render {
                    let enabled = render.toggle_vsync();
                    log::info!("Vertical sync: {}", if enabled { "ON" } else { "OFF" });
                }
            }
        }
    }

    /// Update and draw one frame
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(render)) = (&self.window, &mut self.render) else {
            return;
        };

        let time = self.animation.update(render.aspect_ratio());
        render.update_scene(self.animation.camera(), time as f32);

        match render.render_frame(self.divider.divider_x()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.recover_surface(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if self.stats.tick() {
            window.update_title(self.stats.fps(), self.animation.is_paused(), render.vsync());
        }

        // No frame limiter: redraw as fast as the present mode allows
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.setup(event_loop) {
            log::error!("Startup failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.divider.reset(physical_size.width);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, event.repeat) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.divider.process_cursor_moved(position.x);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.divider.process_mouse_button(button, state);
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting FXAA demo");

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    // Poll keeps frames coming back to back, there is no frame rate limiter
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
