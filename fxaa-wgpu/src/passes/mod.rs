//! Render pass implementations.

pub mod fxaa;
