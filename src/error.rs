use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Degenerate measurement: {reason}")]
    DegenerateMeasurement { reason: String },

    #[error("No face detected in the input")]
    NoFaceDetected,

    #[error("Invalid landmark data: {0}")]
    InvalidLandmarks(String),

    #[error("Unknown face shape: {0:?}")]
    UnknownShape(String),
}

impl Error {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Error::DegenerateMeasurement {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
