use thiserror::Error;

/// Top-level error type for the measurement tools.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to curve sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to point capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("expected exactly 3 control points, got {captured}")]
    IncompletePointSet { captured: usize },
}

/// Errors related to the display collaborator.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`MeasureError`].
pub type Result<T> = std::result::Result<T, MeasureError>;
