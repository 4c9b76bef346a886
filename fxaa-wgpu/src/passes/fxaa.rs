//! FXAA pass: source selection, parameter push and full-screen triangle draw
//! into the presentation target, with an optional overlay before the target ends.

use crate::backend::{CommonResources, PresentTarget, TargetExtent};
use crate::error::FxaaError;
use crate::overlay::Overlay;
use crate::pipeline;
use crate::recorder::{RenderCommands, ScissorRect, TargetClear, TargetRecorder, Viewport};
use crate::settings::FxaaSettings;
use crate::source::{select_source, UpstreamSources};
use crate::visualization::VisualizationType;

/// Binding slot of the filtered source.
pub const SOURCE_SLOT: u32 = 0;

/// Debug group enclosing the pass on the GPU timeline.
pub const PROFILE_SCOPE: &str = "FXAA";

/// Record one frame of the FXAA pass.
///
/// Disabled: records nothing. Enabled: begin, debug group, viewport
/// (flipped), scissor, pipeline, source, parameters, draw(3), overlay,
/// close group, end.
pub fn record_fxaa_pass<R: TargetRecorder>(
    recorder: &mut R,
    pipeline: &<R::Pass as RenderCommands>::Pipeline,
    settings: FxaaSettings,
    mode: VisualizationType,
    extent: TargetExtent,
    sources: &UpstreamSources<'_, <R::Pass as RenderCommands>::Source>,
    overlay: Option<&mut dyn Overlay<R::Pass>>,
) {
    if !settings.enabled {
        return;
    }

    log::trace!("FXAA pass: mode={mode}, params={:?}", settings.params);

    let mut pass = recorder.begin_target(&TargetClear::OPAQUE_BLACK);
    pass.push_debug_group(PROFILE_SCOPE);

    pass.set_viewport(&Viewport::flipped(extent));
    pass.set_scissor(&ScissorRect::full(extent));
    pass.bind_pipeline(pipeline);

    let source = select_source(mode, sources).output();
    pass.bind_source(SOURCE_SLOT, source);

    let block = settings.params.push_constants();
    pass.push_fragment_constants(0, block.as_bytes());

    pass.draw(0..3, 0..1);

    if let Some(overlay) = overlay {
        overlay.render(&mut pass);
    }

    pass.pop_debug_group();
    pass.end();
}

/// The FXAA pass: owns its pipeline, settings and target extent.
pub struct FastApproximateAa {
    pipeline: wgpu::RenderPipeline,
    extent: TargetExtent,
    settings: FxaaSettings,
}

impl FastApproximateAa {
    /// Build the pass for `target`. A resize needs a new pass.
    pub fn new(
        device: &wgpu::Device,
        common: &CommonResources,
        target: &PresentTarget,
    ) -> Result<Self, FxaaError> {
        let pipeline = pipeline::create_fxaa_pipeline(device, &common.combined_sampler_bgl, target)?;
        Ok(Self {
            pipeline,
            extent: target.extent,
            settings: FxaaSettings::default(),
        })
    }

    /// Record the pass for this frame.
    ///
    /// Takes `&self`: settings are copied once up front, and no `&mut` edit
    /// (through [`gui`](Self::gui) or [`settings_mut`](Self::settings_mut))
    /// can overlap the call.
    pub fn render<R>(
        &self,
        recorder: &mut R,
        common: &CommonResources,
        sources: &UpstreamSources<'_, wgpu::BindGroup>,
        overlay: Option<&mut dyn Overlay<R::Pass>>,
    ) where
        R: TargetRecorder,
        R::Pass: RenderCommands<Pipeline = wgpu::RenderPipeline, Source = wgpu::BindGroup>,
    {
        record_fxaa_pass(
            recorder,
            &self.pipeline,
            self.settings,
            common.current_visualization,
            self.extent,
            sources,
            overlay,
        );
    }

    /// Parameter-editing surface. Returns true if anything changed.
    pub fn gui(&mut self, ui: &mut egui::Ui) -> bool {
        self.settings.ui(ui)
    }

    pub fn enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    pub fn settings(&self) -> &FxaaSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut FxaaSettings {
        &mut self.settings
    }

    pub fn extent(&self) -> TargetExtent {
        self.extent
    }
}
