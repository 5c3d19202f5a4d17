use thiserror::Error;

/// Validation failures for layout and animation configuration.
///
/// Nothing in the ripple pipeline performs I/O, so every error here is a
/// configuration problem detected before any marker is created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,
    #[error("marker target must be at least 1")]
    ZeroMarkerTarget,
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("max radius {max_radius} exceeds half the container size ({half})")]
    RadiusOutsideContainer { max_radius: f32, half: f32 },
    #[error("marker size {marker_size} packs too many markers on a ring of radius {max_radius}")]
    TooDense { marker_size: f32, max_radius: f32 },
    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),
    #[error("cannot animate an empty marker set")]
    NoMarkers,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

pub(crate) fn require_positive(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
