//! Embedded WGSL shader source strings for the FXAA pass.

pub const FULLSCREEN_TRIANGLE_VERT: &str = include_str!("../shaders/fullscreen_triangle.wgsl");
pub const FXAA_FRAG: &str = include_str!("../shaders/fxaa.wgsl");

/// Entry point names, shared with pipeline creation.
pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";
