//! Construction-time errors for the FXAA pass.
//!
//! Per-frame failures are not represented here: an invalid encoder, target or
//! bind group is reported by wgpu's own validation and aborts the frame there.

/// Errors raised while building the FXAA pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FxaaError {
    #[error("device is missing required features: {0:?}")]
    MissingFeature(wgpu::Features),

    #[error("push constant limit too small: need {required} bytes, device allows {available}")]
    PushConstantLimit { required: u32, available: u32 },

    #[error("invalid target extent {width}x{height}")]
    InvalidExtent { width: u32, height: u32 },

    #[error("pipeline creation failed: {0}")]
    Pipeline(String),
}

impl FxaaError {
    pub fn pipeline<T: ToString>(msg: T) -> Self {
        FxaaError::Pipeline(msg.to_string())
    }
}
