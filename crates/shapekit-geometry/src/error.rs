/// Errors that can occur while generating shape meshes.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An integer did not name a variant of a closed enum.
    OutOfRange { what: &'static str, value: i32 },

    /// A triangulator or generator received fewer points than it needs.
    TooFewPoints { required: usize, actual: usize },

    /// A parameter is outside the range the algorithm can work with.
    InvalidParameter { name: &'static str, value: f32 },

    /// Input collapsed to zero-length segments or non-finite values.
    DegenerateGeometry(&'static str),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::OutOfRange { what, value } => {
                write!(f, "Value {} is out of range for {}", value, what)
            }
            GeometryError::TooFewPoints { required, actual } => write!(
                f,
                "Too few points: at least {} required, got {}",
                required, actual
            ),
            GeometryError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter {}: {}", name, value)
            }
            GeometryError::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for mesh generation.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Fail with [`GeometryError::TooFewPoints`] unless `actual >= required`.
pub(crate) fn require_points(actual: usize, required: usize) -> GeometryResult<()> {
    if actual < required {
        Err(GeometryError::TooFewPoints { required, actual })
    } else {
        Ok(())
    }
}
