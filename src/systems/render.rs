//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The two offscreen targets (raw render and FXAA result)
//! - Piston scene, FXAA and composite passes

use std::sync::Arc;
use winit::window::Window;
use fxaa_render::{
    CompositePipeline, ContextError, FxaaError, FxaaPipeline, PerspectiveCamera, Pistons,
    RenderContext, RenderTarget, Texture, TextureError,
};
use crate::config::AppConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
    /// An image asset failed to load
    Texture(TextureError),
    /// The FXAA shader failed to build
    Fxaa(FxaaError),
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "{}", e),
            RenderError::Texture(e) => write!(f, "{}", e),
            RenderError::Fxaa(e) => write!(f, "{}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            RenderError::Texture(e) => Some(e),
            RenderError::Fxaa(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<TextureError> for RenderError {
    fn from(e: TextureError) -> Self {
        RenderError::Texture(e)
    }
}

impl From<FxaaError> for RenderError {
    fn from(e: FxaaError) -> Self {
        RenderError::Fxaa(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    /// Raw scene render
    original: RenderTarget,
    /// FXAA output
    result: RenderTarget,
    pistons: Pistons,
    fxaa: FxaaPipeline,
    compositor: CompositePipeline,
    arrow: Texture,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// Fails if the GPU, the FXAA shader or the arrow image cannot be set up.
    pub fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, config.window.vsync))?;

        // Shaders and textures first: these are the startup failures worth reporting
        let fxaa = FxaaPipeline::new(&context.device, config.fxaa.to_settings())?;
        let arrow = Texture::load(&context.device, &context.queue, &config.rendering.arrow_path)?;

        let pistons = Pistons::setup(&context.device, config.pistons.to_settings());
        let compositor = CompositePipeline::new(&context.device, context.format());

        let (width, height) = (context.config.width, context.config.height);
        let (original, result) = Self::create_targets(&context.device, width, height);

        let bg = &config.rendering.background_color;
        let clear_color = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        };

        Ok(Self {
            context,
            original,
            result,
            pistons,
            fxaa,
            compositor,
            arrow,
            clear_color,
        })
    }

    /// Bilinear, single-sampled targets the size of the window
    fn create_targets(device: &wgpu::Device, width: u32, height: u32) -> (RenderTarget, RenderTarget) {
        (
            RenderTarget::new(device, width, height, true, "Original Target"),
            RenderTarget::new(device, width, height, false, "FXAA Result Target"),
        )
    }

    /// Handle window resize: recreate both offscreen targets
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        let (original, result) = Self::create_targets(&self.context.device, width, height);
        self.original = original;
        self.result = result;
        log::debug!("Render targets resized to {}x{}", width, height);
    }

    /// Toggle vertical sync; returns the new state
    pub fn toggle_vsync(&mut self) -> bool {
        let enabled = !self.context.vsync();
        self.context.set_vsync(enabled);
        enabled
    }

    pub fn vsync(&self) -> bool {
        self.context.vsync()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.context.aspect_ratio()
    }

    /// Animate the scene and upload the camera
    pub fn update_scene(&mut self, camera: &PerspectiveCamera, time: f32) {
        self.pistons.update(&self.context.queue, camera, time);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, divider_x: u32) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Scene into the offscreen target
        self.pistons.draw(&mut encoder, &self.original, self.clear_color);

        // Anti-alias it into the second target
        self.fxaa.apply(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            &self.result,
            &self.original,
        );

        // FXAA left of the divider, raw right of it
        self.compositor.render(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            &view,
            &self.result,
            &self.original,
            &self.arrow,
            divider_x,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_wrapped_errors_keep_source() {
        use std::error::Error;

        let err = RenderError::from(FxaaError::Shader("oops".to_string()));
        assert_eq!(format!("{}", err), "FXAA shader error: oops");
        assert!(err.source().is_some());

        let err = RenderError::from(ContextError::NoAdapter);
        assert!(format!("{}", err).contains("adapter"));
    }
}
