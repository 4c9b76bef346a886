//! Source selection: maps the current visualization mode to the upstream
//! output the FXAA pass filters.

use crate::visualization::VisualizationType;

/// Contract exposed by every upstream renderer: the bindable handle for its
/// most recent output.
pub trait UpstreamOutput<S: ?Sized> {
    fn output(&self) -> &S;
}

/// A bare handle is its own provider.
impl<S> UpstreamOutput<S> for S {
    fn output(&self) -> &S {
        self
    }
}

/// The six upstream providers the pass can filter. Non-owning.
pub struct UpstreamSources<'a, S: ?Sized> {
    pub deferred_shading: &'a dyn UpstreamOutput<S>,
    pub shadows: &'a dyn UpstreamOutput<S>,
    pub ambient_occlusion: &'a dyn UpstreamOutput<S>,
    pub reflections: &'a dyn UpstreamOutput<S>,
    pub global_illumination: &'a dyn UpstreamOutput<S>,
    pub reference: &'a dyn UpstreamOutput<S>,
}

/// Pick the provider for `mode`. Total: anything that is not one of the five
/// named stages resolves to the reference path tracer.
pub fn select_source<'a, S: ?Sized>(
    mode: VisualizationType,
    sources: &UpstreamSources<'a, S>,
) -> &'a dyn UpstreamOutput<S> {
    match mode {
        VisualizationType::Final => sources.deferred_shading,
        VisualizationType::Shadows => sources.shadows,
        VisualizationType::AmbientOcclusion => sources.ambient_occlusion,
        VisualizationType::Reflections => sources.reflections,
        VisualizationType::GlobalIllumination => sources.global_illumination,
        _ => sources.reference,
    }
}
