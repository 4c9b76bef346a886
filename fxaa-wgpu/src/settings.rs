//! Tunable FXAA settings and their compiled-in defaults.

use fxaa_gpu_shared::uniforms::FxaaPushConstants;

/// Filter parameters delivered to the fragment shader. Not clamped: values
/// reach the shader exactly as set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxaaParams {
    /// Minimum absolute luma delta treated as an edge.
    pub absolute_luma_threshold: f32,
    /// Minimum luma delta relative to the local maximum treated as an edge.
    pub relative_luma_threshold: f32,
    /// Sharpening bias applied to the directional blend.
    pub console_sharpness: f32,
    /// Output the edge visualization instead of the filtered image.
    pub debug_mode: bool,
}

impl Default for FxaaParams {
    fn default() -> Self {
        Self {
            absolute_luma_threshold: 0.08,
            relative_luma_threshold: 0.25,
            console_sharpness: 4.0,
            debug_mode: false,
        }
    }
}

impl FxaaParams {
    pub fn push_constants(&self) -> FxaaPushConstants {
        FxaaPushConstants::new(
            self.absolute_luma_threshold,
            self.relative_luma_threshold,
            self.console_sharpness,
            self.debug_mode,
        )
    }
}

/// Everything the editing surface exposes: the enablement flag plus the
/// filter parameters. `Copy`, so a frame reads one whole snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxaaSettings {
    pub enabled: bool,
    pub params: FxaaParams,
}

impl Default for FxaaSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            params: FxaaParams::default(),
        }
    }
}

impl FxaaSettings {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_absolute_luma_threshold(mut self, value: f32) -> Self {
        self.params.absolute_luma_threshold = value;
        self
    }

    pub fn with_relative_luma_threshold(mut self, value: f32) -> Self {
        self.params.relative_luma_threshold = value;
        self
    }

    pub fn with_console_sharpness(mut self, value: f32) -> Self {
        self.params.console_sharpness = value;
        self
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.params.debug_mode = debug_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_tuned_values() {
        let settings = FxaaSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.params.absolute_luma_threshold, 0.08);
        assert_eq!(settings.params.relative_luma_threshold, 0.25);
        assert_eq!(settings.params.console_sharpness, 4.0);
        assert!(!settings.params.debug_mode);
    }

    #[test]
    fn push_constants_mirror_params() {
        let params = FxaaSettings::default()
            .with_absolute_luma_threshold(0.1)
            .with_relative_luma_threshold(0.5)
            .with_console_sharpness(8.0)
            .with_debug_mode(true)
            .params;
        assert_eq!(
            params.push_constants(),
            FxaaPushConstants {
                absolute_luma_threshold: 0.1,
                relative_luma_threshold: 0.5,
                console_sharpness: 8.0,
                debug_mode: 1.0,
            }
        );
    }

    #[test]
    fn builders_do_not_clamp() {
        let settings = FxaaSettings::default()
            .with_absolute_luma_threshold(-3.0)
            .with_console_sharpness(1e9)
            .with_enabled(false);
        assert!(!settings.enabled);
        assert_eq!(settings.params.push_constants().absolute_luma_threshold, -3.0);
        assert_eq!(settings.params.push_constants().console_sharpness, 1e9);
    }
}
