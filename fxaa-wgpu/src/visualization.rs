//! Visualization mode: which upstream stage's output is being inspected this frame.

use std::fmt;
use std::str::FromStr;

/// Mutually exclusive visualization modes. Owned by the frame orchestrator;
/// the FXAA pass only reads it.
#[repr(u32)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualizationType {
    #[default]
    Final = 0,
    Shadows = 1,
    AmbientOcclusion = 2,
    Reflections = 3,
    GlobalIllumination = 4,
    Reference = 5,
}

impl VisualizationType {
    pub const ALL: [VisualizationType; 6] = [
        VisualizationType::Final,
        VisualizationType::Shadows,
        VisualizationType::AmbientOcclusion,
        VisualizationType::Reflections,
        VisualizationType::GlobalIllumination,
        VisualizationType::Reference,
    ];

    /// Decode a raw mode value (e.g. from a host UI or a C caller).
    /// Values outside the known range resolve to `Reference`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => VisualizationType::Final,
            1 => VisualizationType::Shadows,
            2 => VisualizationType::AmbientOcclusion,
            3 => VisualizationType::Reflections,
            4 => VisualizationType::GlobalIllumination,
            _ => VisualizationType::Reference,
        }
    }

    pub fn as_raw(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualizationType::Final => "final",
            VisualizationType::Shadows => "shadows",
            VisualizationType::AmbientOcclusion => "ambient-occlusion",
            VisualizationType::Reflections => "reflections",
            VisualizationType::GlobalIllumination => "global-illumination",
            VisualizationType::Reference => "reference",
        }
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisualizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisualizationType::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown visualization mode '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip_for_known_modes() {
        for mode in VisualizationType::ALL {
            assert_eq!(VisualizationType::from_raw(mode.as_raw()), mode);
        }
    }

    #[test]
    fn unknown_raw_values_fall_back_to_reference() {
        for raw in [6, 7, 42, 1000, u32::MAX] {
            assert_eq!(VisualizationType::from_raw(raw), VisualizationType::Reference);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Shadows".parse(), Ok(VisualizationType::Shadows));
        assert_eq!(
            "global-illumination".parse(),
            Ok(VisualizationType::GlobalIllumination)
        );
        assert!("bloom".parse::<VisualizationType>().is_err());
    }

    #[test]
    fn default_is_final() {
        assert_eq!(VisualizationType::default(), VisualizationType::Final);
    }
}
