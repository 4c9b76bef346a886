//! Render one FXAA frame off-screen and optionally write it to a PNG.
//!
//! Each upstream stage is stood in for by a generated texture: the final
//! composite is a hard diagonal edge, the others are solid colors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fxaa_wgpu::headless::{self, HeadlessGpu};
use fxaa_wgpu::{
    CommonResources, FastApproximateAa, PresentTarget, TargetExtent, UpstreamSources,
    VisualizationType, WgpuTargetRecorder,
};

#[derive(Parser, Debug)]
#[command(name = "fxaa-headless", about = "Render one FXAA frame without a window")]
struct Args {
    /// Visualization mode: final, shadows, ambient-occlusion, reflections,
    /// global-illumination, reference.
    #[arg(long, default_value = "final")]
    mode: VisualizationType,

    #[arg(long, default_value_t = 256)]
    width: u32,

    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Output the edge visualization instead of the filtered image.
    #[arg(long)]
    debug: bool,

    /// Skip the pass entirely.
    #[arg(long)]
    disabled: bool,

    #[arg(long)]
    absolute_luma_threshold: Option<f32>,

    #[arg(long)]
    relative_luma_threshold: Option<f32>,

    #[arg(long)]
    console_sharpness: Option<f32>,

    /// Write the presentation target to this PNG.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// A generated upstream output: texture kept alive next to its bind group.
struct StandIn {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl StandIn {
    fn new(
        gpu: &HeadlessGpu,
        common: &CommonResources,
        extent: TargetExtent,
        pixels: &[u8],
        label: &str,
    ) -> Result<Self> {
        let (texture, view) =
            headless::create_source_texture(&gpu.device, &gpu.queue, extent, pixels, label)?;
        let bind_group = common.create_source_bind_group(&gpu.device, &view, label);
        Ok(Self {
            _texture: texture,
            bind_group,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let gpu = HeadlessGpu::new()?;
    let extent = TargetExtent::new(args.width, args.height)?;
    let target = PresentTarget {
        extent,
        color_format: headless::TARGET_FORMAT,
        depth_format: Some(headless::DEPTH_FORMAT),
    };

    let mut common = CommonResources::new(&gpu.device);
    common.current_visualization = args.mode;

    let mut fxaa = FastApproximateAa::new(&gpu.device, &common, &target)?;
    {
        let settings = fxaa.settings_mut();
        settings.enabled = !args.disabled;
        settings.params.debug_mode = args.debug;
        if let Some(v) = args.absolute_luma_threshold {
            settings.params.absolute_luma_threshold = v;
        }
        if let Some(v) = args.relative_luma_threshold {
            settings.params.relative_luma_threshold = v;
        }
        if let Some(v) = args.console_sharpness {
            settings.params.console_sharpness = v;
        }
    }

    let final_pixels = headless::diagonal_pixels(extent, [240, 240, 240, 255], [20, 20, 20, 255]);
    let deferred = StandIn::new(&gpu, &common, extent, &final_pixels, "Deferred Output")?;
    let solid = |rgba: [u8; 4], label: &str| {
        StandIn::new(&gpu, &common, extent, &headless::solid_pixels(extent, rgba), label)
    };
    let shadows = solid([128, 128, 128, 255], "Shadows Output")?;
    let ao = solid([200, 200, 200, 255], "AO Output")?;
    let reflections = solid([40, 80, 160, 255], "Reflections Output")?;
    let gi = solid([160, 120, 40, 255], "GI Output")?;
    let reference = solid([90, 160, 90, 255], "Reference Output")?;

    let sources = UpstreamSources {
        deferred_shading: &deferred.bind_group,
        shadows: &shadows.bind_group,
        ambient_occlusion: &ao.bind_group,
        reflections: &reflections.bind_group,
        global_illumination: &gi.bind_group,
        reference: &reference.bind_group,
    };

    let (color, color_view) = headless::create_color_target(&gpu.device, extent, "Headless Present");
    let (_depth, depth_view) = headless::create_depth_target(&gpu.device, extent);

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("FXAA Frame Encoder"),
        });
    {
        let mut recorder = WgpuTargetRecorder::new(&mut encoder, &color_view, Some(&depth_view));
        fxaa.render(&mut recorder, &common, &sources, None);
    }
    gpu.queue.submit(std::iter::once(encoder.finish()));

    log::info!(
        "Rendered {}x{} frame (mode={}, enabled={})",
        extent.width,
        extent.height,
        common.current_visualization,
        fxaa.enabled()
    );

    if let Some(path) = args.output {
        let pixels = headless::read_texture_rgba8(&gpu.device, &gpu.queue, &color, extent)?;
        image::save_buffer(
            &path,
            &pixels,
            extent.width,
            extent.height,
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
