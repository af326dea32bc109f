//! Image textures
//!
//! Decodes image files with the `image` crate and uploads them as
//! `Rgba8Unorm` textures.

use std::path::Path;

/// Texture loading errors
#[derive(Debug)]
pub enum TextureError {
    /// File could not be read
    Io(std::io::Error),
    /// Bytes are not a decodable image
    Decode(image::ImageError),
    /// Image has a zero dimension
    Empty,
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "Texture IO error: {}", e),
            TextureError::Decode(e) => write!(f, "Texture decode error: {}", e),
            TextureError::Empty => write!(f, "Texture has zero size"),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::Io(e) => Some(e),
            TextureError::Decode(e) => Some(e),
            TextureError::Empty => None,
        }
    }
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

/// A sampled GPU texture with its pixel size
pub struct Texture {
    #[allow(dead_code)] // keeps the texture alive alongside its view
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl Texture {
    /// Load an image file from disk
    pub fn load<P: AsRef<Path>>(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: P,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let label = path.display().to_string();
        let texture = Self::from_image_bytes(device, queue, &bytes, &label)?;
        log::info!("Loaded texture '{}' ({}x{})", label, texture.width, texture.height);
        Ok(texture)
    }

    /// Decode an in-memory image (PNG, ...)
    pub fn from_image_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
    ) -> Result<Self, TextureError> {
        let rgba = decode_rgba(bytes)?;
        Ok(Self::from_rgba(device, queue, &rgba, label))
    }

    /// Upload already decoded RGBA pixels
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &image::RgbaImage,
        label: &str,
    ) -> Self {
        let (width, height) = rgba.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width,
            height,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Decode image bytes to RGBA8, rejecting empty images
pub fn decode_rgba(bytes: &[u8]) -> Result<image::RgbaImage, TextureError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(TextureError::Empty);
    }
    Ok(rgba)
}
