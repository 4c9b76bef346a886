use bytemuck::{Pod, Zeroable};

/// FXAA parameter block: matches `FxaaParams` in fxaa.wgsl (fragment push constants).
/// Four 4-byte scalars, no padding: 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FxaaPushConstants {
    pub absolute_luma_threshold: f32,
    pub relative_luma_threshold: f32,
    pub console_sharpness: f32,
    /// 1.0 = edge visualization, 0.0 = filtered output.
    pub debug_mode: f32,
}

/// Size in bytes of the push constant range declared by the FXAA pipeline layout.
pub const FXAA_PUSH_CONSTANTS_SIZE: u32 = std::mem::size_of::<FxaaPushConstants>() as u32;

impl FxaaPushConstants {
    pub fn new(
        absolute_luma_threshold: f32,
        relative_luma_threshold: f32,
        console_sharpness: f32,
        debug_mode: bool,
    ) -> Self {
        Self {
            absolute_luma_threshold,
            relative_luma_threshold,
            console_sharpness,
            debug_mode: if debug_mode { 1.0 } else { 0.0 },
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_sixteen_bytes() {
        assert_eq!(FXAA_PUSH_CONSTANTS_SIZE, 16);
        assert_eq!(std::mem::align_of::<FxaaPushConstants>(), 4);
    }

    #[test]
    fn debug_flag_encodes_as_float() {
        assert_eq!(FxaaPushConstants::new(0.1, 0.2, 3.0, true).debug_mode, 1.0);
        assert_eq!(FxaaPushConstants::new(0.1, 0.2, 3.0, false).debug_mode, 0.0);
    }

    #[test]
    fn byte_layout_follows_field_order() {
        let block = FxaaPushConstants::new(0.08, 0.25, 4.0, true);
        let bytes = block.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &0.08f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0.25f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &4.0f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let block = FxaaPushConstants::new(-1.0, 7.5, f32::MAX, false);
        assert_eq!(block.absolute_luma_threshold, -1.0);
        assert_eq!(block.relative_luma_threshold, 7.5);
        assert_eq!(block.console_sharpness, f32::MAX);
    }
}
