//! Shared backend resources consumed by the FXAA pass, and the description of
//! the presentation target it renders into.

use crate::error::FxaaError;
use crate::pipeline;
use crate::visualization::VisualizationType;

/// Target dimensions, captured once when the pass is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetExtent {
    pub width: u32,
    pub height: u32,
}

impl TargetExtent {
    pub fn new(width: u32, height: u32) -> Result<Self, FxaaError> {
        if width == 0 || height == 0 {
            return Err(FxaaError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Presentation render target the pass draws into: surface color format plus
/// the optional depth attachment carried by the presentation render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentTarget {
    pub extent: TargetExtent,
    pub color_format: wgpu::TextureFormat,
    pub depth_format: Option<wgpu::TextureFormat>,
}

impl PresentTarget {
    /// Describe the swapchain from its current configuration.
    pub fn from_surface_config(
        config: &wgpu::SurfaceConfiguration,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Result<Self, FxaaError> {
        Ok(Self {
            extent: TargetExtent::new(config.width, config.height)?,
            color_format: config.format,
            depth_format,
        })
    }
}

/// Resources shared across passes of the frame.
pub struct CommonResources {
    /// Mode chosen by the frame orchestrator; read-only for the FXAA pass.
    pub current_visualization: VisualizationType,
    /// One combined image+sampler binding (texture at 0, sampler at 1).
    pub combined_sampler_bgl: wgpu::BindGroupLayout,
    /// Bilinear clamp sampler for upstream outputs.
    pub bilinear_sampler: wgpu::Sampler,
}

impl CommonResources {
    pub fn new(device: &wgpu::Device) -> Self {
        let combined_sampler_bgl = pipeline::create_combined_sampler_bgl(device);

        let bilinear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Bilinear Clamp Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            current_visualization: VisualizationType::default(),
            combined_sampler_bgl,
            bilinear_sampler,
        }
    }

    /// Build the bind group an upstream renderer exposes for its output view.
    pub fn create_source_bind_group(
        &self,
        device: &wgpu::Device,
        view: &wgpu::TextureView,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.combined_sampler_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.bilinear_sampler),
                },
            ],
        })
    }
}
