//! Definition of the [`ShapeError`] returned by every validating operation.

use std::fmt::Debug;

use thiserror::Error;


/// A shape that does not match the declared template.
///
/// Every variant carries what was declared (`expected`) and what was offered (`found`) in a
/// readable form. None of these errors are transient; the caller has to retry with corrected input.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ShapeError {
    /// A point's, position's or matrix's dimensionality disagrees with the declared one.
    #[error("wrong point type: expected {expected}, found {found}")]
    WrongPointType { expected: String, found: String },

    /// A position's length disagrees with the declared per-slot length.
    #[error("wrong position size: expected {expected}, found {found}")]
    WrongPositionSize { expected: String, found: String },

    /// A matrix's position count or a container's matrix profile disagrees with the template.
    #[error("wrong matrix size: expected {expected}, found {found}")]
    WrongMatrixSize { expected: String, found: String },

    /// A shape template array's length disagrees with the declared element count.
    #[error("wrong container size: expected {expected} entries, found {found}")]
    WrongContainerSize { expected: usize, found: usize },

    /// Indexed access outside of `[0, length)`.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A raw coordinate array does not describe points of a supported dimensionality.
    #[error("shape mismatch: expected {expected} coordinates, found {found}")]
    ShapeMismatch { expected: String, found: usize },
}


impl ShapeError {
    pub(crate) fn wrong_point_type(expected: impl Debug, found: impl Debug) -> Self {
        ShapeError::WrongPointType { expected: format!("{expected:?}"), found: format!("{found:?}") }
    }

    pub(crate) fn wrong_position_size(expected: impl Debug, found: impl Debug) -> Self {
        ShapeError::WrongPositionSize { expected: format!("{expected:?}"), found: format!("{found:?}") }
    }

    pub(crate) fn wrong_matrix_size(expected: impl Debug, found: impl Debug) -> Self {
        ShapeError::WrongMatrixSize { expected: format!("{expected:?}"), found: format!("{found:?}") }
    }

    /// Returns `Ok(())` if `index` addresses one of `length` slots.
    pub(crate) fn check_index(index: usize, length: usize) -> Result<()> {
        if index < length {
            return Ok(());
        }
        return Err(ShapeError::IndexOutOfRange { index, length });
    }
}


/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShapeError>;
