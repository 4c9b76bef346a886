//! Data shared between the FXAA pass and its shaders.
//! Backend-independent: no device or surface types live here.

pub mod shaders;
pub mod uniforms;
