use std::fmt;

/// Custom error types for track plotting
#[derive(Debug)]
pub enum TrackError {
    /// I/O errors
    Io(std::io::Error),
    /// CSV reading errors
    Csv(csv::Error),
    /// Input that violates a precondition (empty track, bad threshold)
    InvalidInput(String),
    /// Malformed field value with context
    Parse { value: String, reason: String },
    /// Required CSV column absent
    Configuration(String),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::Io(err) => write!(f, "I/O error: {}", err),
            TrackError::Csv(err) => write!(f, "CSV error: {}", err),
            TrackError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TrackError::Parse { value, reason } => {
                write!(f, "Parse error for '{}': {}", value, reason)
            }
            TrackError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackError::Io(err) => Some(err),
            TrackError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackError {
    fn from(err: std::io::Error) -> Self {
        TrackError::Io(err)
    }
}

impl From<csv::Error> for TrackError {
    fn from(err: csv::Error) -> Self {
        TrackError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;
