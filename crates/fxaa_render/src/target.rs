//! Offscreen render targets
//!
//! A target is a color texture that can be rendered into and sampled from,
//! with an optional depth attachment. No multisampling: the point of the
//! demo is to compare raw aliased edges with the FXAA output.

/// Offscreen framebuffer
pub struct RenderTarget {
    color_view: wgpu::TextureView,
    depth_view: Option<wgpu::TextureView>,
    size: (u32, u32),
}

impl RenderTarget {
    /// Color format of every offscreen target
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
    /// Depth format used by the scene pass
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a target of the given size; zero dimensions are bumped to 1
    pub fn new(device: &wgpu::Device, width: u32, height: u32, with_depth: bool, label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };

        let color = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let color_view = color.create_view(&wgpu::TextureViewDescriptor::default());

        let depth_view = with_depth.then(|| {
            let depth = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Offscreen Depth Texture"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: Self::DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });
            depth.create_view(&wgpu::TextureViewDescriptor::default())
        });

        log::debug!("Created render target '{}' ({}x{})", label, size.width, size.height);

        Self {
            color_view,
            depth_view,
            size: (size.width, size.height),
        }
    }

    pub fn color_view(&self) -> &wgpu::TextureView {
        &self.color_view
    }

    pub fn depth_view(&self) -> Option<&wgpu::TextureView> {
        self.depth_view.as_ref()
    }

    /// Size in pixels (width, height)
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}
