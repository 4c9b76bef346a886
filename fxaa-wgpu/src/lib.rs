//! FXAA post-process pass on wgpu.
//!
//! Each frame the pass picks one upstream output according to the current
//! [`VisualizationType`], pushes the filter parameters as fragment push
//! constants, draws a full-screen triangle into the presentation target and
//! lets an optional [`Overlay`] draw on top before the target ends.
//!
//! The device must be created with [`pipeline::required_features`] and
//! [`pipeline::required_limits`].

pub mod backend;
pub mod error;
pub mod gui;
pub mod headless;
pub mod overlay;
pub mod passes;
pub mod pipeline;
pub mod recorder;
pub mod settings;
pub mod source;
pub mod visualization;

#[cfg(test)]
mod mock;

pub use backend::{CommonResources, PresentTarget, TargetExtent};
pub use error::FxaaError;
pub use overlay::Overlay;
pub use passes::fxaa::{record_fxaa_pass, FastApproximateAa};
pub use recorder::{RenderCommands, TargetRecorder, WgpuTargetRecorder};
pub use settings::{FxaaParams, FxaaSettings};
pub use source::{select_source, UpstreamOutput, UpstreamSources};
pub use visualization::VisualizationType;

pub use fxaa_gpu_shared::uniforms::FxaaPushConstants;
