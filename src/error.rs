use core::fmt;

/// Boundary validation failures. Tick logic itself never fails.
#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    InvalidDimensions { width: f32, height: f32 },
    InvalidChance { name: &'static str, value: f64 },
    InvalidConfig { key: String, value: String },
    MalformedAction(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid screen dimensions {width}x{height}")
            }
            Self::InvalidChance { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Self::InvalidConfig { key, value } => {
                write!(f, "could not parse {key}={value:?}")
            }
            Self::MalformedAction(reason) => write!(f, "malformed action: {reason}"),
        }
    }
}

impl std::error::Error for GameError {}
