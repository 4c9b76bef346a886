//! Off-screen device and texture helpers for running the pass without a
//! window: the demo binary and GPU integration tests build on these.

use anyhow::{anyhow, bail, ensure, Context, Result};

use crate::backend::TargetExtent;
use crate::pipeline;

/// Color format of off-screen presentation targets.
pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
/// Depth format of off-screen presentation targets.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Device and queue created without a surface.
pub struct HeadlessGpu {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl HeadlessGpu {
    /// Request an adapter and a device that can host the FXAA pipeline.
    pub fn new() -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            // Any backend, GL included, so software adapters qualify.
            backends: wgpu::util::backend_bits_from_env().unwrap_or(wgpu::Backends::all()),
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no suitable GPU adapter"))?;

        let info = adapter.get_info();
        let missing = pipeline::required_features() - adapter.features();
        if !missing.is_empty() {
            bail!("adapter {} lacks {:?}", info.name, missing);
        }

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("FXAA Headless Device"),
                required_features: pipeline::required_features(),
                required_limits: pipeline::required_limits(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        log::info!("Headless device ready: {} ({})", info.name, info.backend.to_str());

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }
}

fn extent3d(extent: TargetExtent) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: extent.width,
        height: extent.height,
        depth_or_array_layers: 1,
    }
}

/// Color target standing in for the swapchain image.
pub fn create_color_target(
    device: &wgpu::Device,
    extent: TargetExtent,
    label: &str,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: extent3d(extent),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TARGET_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

pub fn create_depth_target(
    device: &wgpu::Device,
    extent: TargetExtent,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Headless Depth"),
        size: extent3d(extent),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

/// Upload tightly packed RGBA8 pixels as a sampleable texture.
pub fn create_source_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    extent: TargetExtent,
    rgba: &[u8],
    label: &str,
) -> Result<(wgpu::Texture, wgpu::TextureView)> {
    let expected = extent.width as usize * extent.height as usize * 4;
    ensure!(
        rgba.len() == expected,
        "{label}: expected {expected} bytes of RGBA8, got {}",
        rgba.len()
    );

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: extent3d(extent),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * extent.width),
            rows_per_image: Some(extent.height),
        },
        extent3d(extent),
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    Ok((texture, view))
}

/// Solid-color RGBA8 pixel data.
pub fn solid_pixels(extent: TargetExtent, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(extent.width as usize * extent.height as usize)
}

/// Hard-edged diagonal split between two colors: the kind of stair-stepped
/// edge FXAA is meant to soften.
pub fn diagonal_pixels(extent: TargetExtent, above: [u8; 4], below: [u8; 4]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(extent.width as usize * extent.height as usize * 4);
    for y in 0..extent.height {
        for x in 0..extent.width {
            // Compare in 64-bit to keep large extents from overflowing.
            let on_or_below = u64::from(x) * u64::from(extent.height)
                >= u64::from(y) * u64::from(extent.width);
            pixels.extend_from_slice(if on_or_below { &below } else { &above });
        }
    }
    pixels
}

fn align_bpr(value: u32) -> u32 {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    value.div_ceil(align) * align
}

/// Copy an RGBA8 texture back to the CPU, rows tightly packed.
pub fn read_texture_rgba8(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    extent: TargetExtent,
) -> Result<Vec<u8>> {
    let tight_bpr = 4 * extent.width;
    let padded_bpr = align_bpr(tight_bpr);

    let staging = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Readback Staging"),
        size: u64::from(padded_bpr) * u64::from(extent.height),
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Readback Encoder"),
    });
    encoder.copy_texture_to_buffer(
        wgpu::ImageCopyTexture {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::ImageCopyBuffer {
            buffer: &staging,
            layout: wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(padded_bpr),
                rows_per_image: Some(extent.height),
            },
        },
        extent3d(extent),
    );
    queue.submit(std::iter::once(encoder.finish()));

    let slice = staging.slice(..);
    let (sender, receiver) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = sender.send(result);
    });
    device.poll(wgpu::Maintain::Wait);

    receiver
        .recv()
        .context("map_async callback dropped")?
        .context("failed to map readback buffer")?;

    let data = slice.get_mapped_range();
    let mut tight = Vec::with_capacity(tight_bpr as usize * extent.height as usize);
    for row in data.chunks(padded_bpr as usize) {
        tight.extend_from_slice(&row[..tight_bpr as usize]);
    }
    drop(data);
    staging.unmap();

    Ok(tight)
}
