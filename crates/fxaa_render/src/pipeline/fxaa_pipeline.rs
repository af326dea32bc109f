//! FXAA post-process pass
//!
//! Reads a rendered color target and writes the anti-aliased result into a
//! second target of the same size. Samples with bilinear filtering, which
//! the edge walk relies on to read between texels.

use wgpu::util::DeviceExt;

use super::types::FxaaUniforms;
use crate::target::RenderTarget;

/// FXAA tuning knobs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxaaSettings {
    /// Amount of sub-pixel aliasing removal (0 = off, 1 = softest)
    pub subpixel_quality: f32,
    /// Minimum local contrast, relative to the brightest neighbour
    pub edge_threshold: f32,
    /// Absolute contrast below which dark areas are skipped
    pub edge_threshold_min: f32,
}

impl Default for FxaaSettings {
    fn default() -> Self {
        Self {
            subpixel_quality: 0.75,
            edge_threshold: 0.166,
            edge_threshold_min: 0.0833,
        }
    }
}

/// FXAA setup errors
#[derive(Debug)]
pub enum FxaaError {
    /// The shader or pipeline failed validation
    Shader(String),
}

impl std::fmt::Display for FxaaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FxaaError::Shader(msg) => write!(f, "FXAA shader error: {}", msg),
        }
    }
}

impl std::error::Error for FxaaError {}

/// The FXAA filter
pub struct FxaaPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    uniform_buffer: wgpu::Buffer,
    settings: FxaaSettings,
}

impl FxaaPipeline {
    /// Compile the shader and build the pipeline
    ///
    /// Validation runs inside an error scope so a bad shader is reported as
    /// an error instead of reaching the device's uncaptured-error handler.
    pub fn new(device: &wgpu::Device, settings: FxaaSettings) -> Result<Self, FxaaError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("FXAA Bind Group Layout"),
            entries: &[
                // Uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Source color
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // Bilinear sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("FXAA Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("FXAA Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/fxaa.wgsl").into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("FXAA Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: RenderTarget::COLOR_FORMAT,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(FxaaError::Shader(err.to_string()));
        }

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("FXAA Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniforms = FxaaUniforms::new(
            1,
            1,
            settings.subpixel_quality,
            settings.edge_threshold,
            settings.edge_threshold_min,
        );
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("FXAA Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        log::info!(
            "FXAA ready (subpixel {:.2}, edge {:.3}, edge min {:.4})",
            settings.subpixel_quality,
            settings.edge_threshold,
            settings.edge_threshold_min
        );

        Ok(Self {
            pipeline,
            bind_group_layout,
            sampler,
            uniform_buffer,
            settings,
        })
    }

    /// Filter `source` into `destination`
    ///
    /// Both targets must have the same size. The bind group is rebuilt per
    /// call since the targets are recreated whenever the window resizes.
    pub fn apply(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        destination: &RenderTarget,
        source: &RenderTarget,
    ) {
        let (width, height) = source.size();
        let uniforms = FxaaUniforms::new(
            width,
            height,
            self.settings.subpixel_quality,
            self.settings.edge_threshold,
            self.settings.edge_threshold_min,
        );
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("FXAA Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(source.color_view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("FXAA Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: destination.color_view(),
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &bind_group, &[]);
        render_pass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_quality_preset() {
        let s = FxaaSettings::default();
        assert_eq!(s.subpixel_quality, 0.75);
        assert_eq!(s.edge_threshold, 0.166);
        assert_eq!(s.edge_threshold_min, 0.0833);
    }

    #[test]
    fn test_error_display() {
        let err = FxaaError::Shader("bad token".to_string());
        assert_eq!(format!("{}", err), "FXAA shader error: bad token");
    }
}
