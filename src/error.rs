//! Error types for the detector.
//!
//! Two failure classes exist: a caller passed parameters that can never work
//! (`ConfigError`), or the mask buffer does not match its declared shape
//! (`InputError`). Finding no star is not an error.

/// Invalid detector parameters, reported before any processing starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A tolerance or radius that must be strictly positive and finite.
    NonPositive { field: &'static str, value: f32 },
    /// A probability-like threshold outside `(0, 1]`.
    ThresholdOutOfRange { field: &'static str, value: f32 },
    /// A count that must be at least one.
    ZeroCount { field: &'static str },
    /// `min_supported_directions` must lie in `[1, 6]`.
    SupportedDirectionsOutOfRange { value: usize },
    /// Hysteresis low threshold above the high threshold.
    InvertedHysteresis { low: f32, high: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive and finite (got {value})")
            }
            ConfigError::ThresholdOutOfRange { field, value } => {
                write!(f, "{field} must lie in (0, 1] (got {value})")
            }
            ConfigError::ZeroCount { field } => write!(f, "{field} must be at least 1"),
            ConfigError::SupportedDirectionsOutOfRange { value } => write!(
                f,
                "min_supported_directions must lie in [1, 6] (got {value})"
            ),
            ConfigError::InvertedHysteresis { low, high } => write!(
                f,
                "edge low threshold {low} exceeds high threshold {high}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Malformed mask input. Masks are never truncated or reshaped to fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputError {
    EmptyDimensions { width: usize, height: usize },
    StrideTooSmall { stride: usize, width: usize },
    LengthMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::EmptyDimensions { width, height } => {
                write!(f, "mask dimensions must be non-zero ({width}x{height})")
            }
            InputError::StrideTooSmall { stride, width } => {
                write!(f, "row stride {stride} is smaller than width {width}")
            }
            InputError::LengthMismatch { expected, found } => write!(
                f,
                "mask buffer holds {found} values but its dimensions require {expected}"
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Any failure surfaced by [`crate::StarDetector`].
#[derive(Clone, Debug, PartialEq)]
pub enum DetectError {
    Config(ConfigError),
    Input(InputError),
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::Config(err) => write!(f, "invalid configuration: {err}"),
            DetectError::Input(err) => write!(f, "invalid input: {err}"),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::Config(err) => Some(err),
            DetectError::Input(err) => Some(err),
        }
    }
}

impl From<ConfigError> for DetectError {
    fn from(err: ConfigError) -> Self {
        DetectError::Config(err)
    }
}

impl From<InputError> for DetectError {
    fn from(err: InputError) -> Self {
        DetectError::Input(err)
    }
}
