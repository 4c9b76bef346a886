//! Render pipeline creation for the FXAA pass.
//! One pipeline, built once: full-screen triangle vertex stage, FXAA fragment
//! stage, one combined image+sampler bind group and a 16-byte fragment push
//! constant range.

use crate::backend::PresentTarget;
use crate::error::FxaaError;
use fxaa_gpu_shared::shaders;
use fxaa_gpu_shared::uniforms::FXAA_PUSH_CONSTANTS_SIZE;

/// Features the device must be created with.
pub fn required_features() -> wgpu::Features {
    wgpu::Features::PUSH_CONSTANTS
}

/// Raise `base` so the FXAA parameter block fits in push constants.
pub fn required_limits(base: wgpu::Limits) -> wgpu::Limits {
    wgpu::Limits {
        max_push_constant_size: base.max_push_constant_size.max(FXAA_PUSH_CONSTANTS_SIZE),
        ..base
    }
}

/// Check that `device` can host the FXAA pipeline.
pub fn check_device_support(device: &wgpu::Device) -> Result<(), FxaaError> {
    let missing = required_features() - device.features();
    if !missing.is_empty() {
        return Err(FxaaError::MissingFeature(missing));
    }

    let available = device.limits().max_push_constant_size;
    if available < FXAA_PUSH_CONSTANTS_SIZE {
        return Err(FxaaError::PushConstantLimit {
            required: FXAA_PUSH_CONSTANTS_SIZE,
            available,
        });
    }
    Ok(())
}

/// Shared fullscreen vertex state (vertex-index-based full-screen triangle).
fn fullscreen_vertex_state(module: &wgpu::ShaderModule) -> wgpu::VertexState<'_> {
    wgpu::VertexState {
        module,
        entry_point: Some(shaders::VERTEX_ENTRY),
        compilation_options: wgpu::PipelineCompilationOptions::default(),
        buffers: &[],
    }
}

/// Depth state for a presentation pass that carries a depth attachment.
/// The filter neither tests nor writes depth.
fn depth_stencil_passthrough(format: wgpu::TextureFormat) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format,
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::Always,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Combined image+sampler bind group layout, matches fxaa.wgsl:
///   0: texture_2d<f32>  (input_texture)
///   1: sampler           (tex_sampler)
pub fn create_combined_sampler_bgl(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Combined Sampler BGL"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Parameter layout: the shared source layout at group 0 plus the FXAA push
/// constant range (fragment stage, bytes 0..16).
pub fn create_fxaa_pipeline_layout(
    device: &wgpu::Device,
    source_bgl: &wgpu::BindGroupLayout,
) -> wgpu::PipelineLayout {
    device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("FXAA Pipeline Layout"),
        bind_group_layouts: &[source_bgl],
        push_constant_ranges: &[wgpu::PushConstantRange {
            stages: wgpu::ShaderStages::FRAGMENT,
            range: 0..FXAA_PUSH_CONSTANTS_SIZE,
        }],
    })
}

/// Create the FXAA pipeline for the given presentation target.
///
/// Validation errors raised by wgpu while compiling the shaders or building
/// the pipeline are captured with an error scope and returned as
/// [`FxaaError::Pipeline`] instead of reaching the device's uncaptured-error
/// handler.
pub fn create_fxaa_pipeline(
    device: &wgpu::Device,
    source_bgl: &wgpu::BindGroupLayout,
    target: &PresentTarget,
) -> Result<wgpu::RenderPipeline, FxaaError> {
    check_device_support(device)?;

    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let vert_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Fullscreen Triangle Vert"),
        source: wgpu::ShaderSource::Wgsl(shaders::FULLSCREEN_TRIANGLE_VERT.into()),
    });

    let frag_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("FXAA Fragment"),
        source: wgpu::ShaderSource::Wgsl(shaders::FXAA_FRAG.into()),
    });

    let layout = create_fxaa_pipeline_layout(device, source_bgl);

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("FXAA Pipeline"),
        layout: Some(&layout),
        vertex: fullscreen_vertex_state(&vert_module),
        fragment: Some(wgpu::FragmentState {
            module: &frag_module,
            entry_point: Some(shaders::FRAGMENT_ENTRY),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: target.color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: target.depth_format.map(depth_stencil_passthrough),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(FxaaError::pipeline(err));
    }

    log::info!(
        "FXAA pipeline created ({}x{}, color {:?}, depth {:?})",
        target.extent.width,
        target.extent.height,
        target.color_format,
        target.depth_format,
    );
    Ok(pipeline)
}
