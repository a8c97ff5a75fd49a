use thiserror::Error;

/// Errors raised while building geometry from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A line needs exactly two endpoints
    #[error("A line needs exactly 2 points, got {found}")]
    InvalidArity { found: usize },
}
