//! Definition of the `Container` struct.
//!
//! A container holds a fixed number of matrices. Unlike the position slots of a [`Matrix`], each
//! matrix slot may have its own dimensionality and its own per-position length profile. The full
//! shape is declared up front and every slot is filled with a matrix of that shape right away.

use std::ops::Index;
use std::slice::Iter;

use log::{debug, trace};

use crate::coordinate::Coordinate;
use crate::dimension::Dimensionality;
use crate::error::{Result, ShapeError};
use crate::matrix::Matrix;


/// Ordered, fixed-length sequence of matrices with a declared per-slot shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Container<C: Coordinate> {
    matrices_position_number: Vec<usize>,
    matrices_position_sizes: Vec<Vec<usize>>,
    point_types: Vec<Dimensionality>,
    matrices: Vec<Matrix<C>>,
}


impl<C: Coordinate> Container<C> {
    /// Constructs a new container with a fully formed, empty matrix in every slot.
    ///
    /// # Arguments
    /// * `length` - number of matrix slots
    /// * `matrices_position_number` - declared number of positions for each matrix slot
    /// * `matrices_position_sizes` - declared position length profile for each matrix slot
    /// * `point_types` - declared dimensionality for each matrix slot
    ///
    /// # Errors
    /// * [`ShapeError::WrongPointType`] if `point_types` does not have `length` entries
    /// * [`ShapeError::WrongContainerSize`] if `matrices_position_number` or
    ///   `matrices_position_sizes` does not have `length` entries
    /// * [`ShapeError::WrongMatrixSize`] if a position length profile does not match the declared
    ///   number of positions of its slot
    pub(crate) fn new(
        length: usize,
        matrices_position_number: Vec<usize>,
        matrices_position_sizes: Vec<Vec<usize>>,
        point_types: Vec<Dimensionality>,
    ) -> Result<Self> {
        if point_types.len() != length {
            return Err(ShapeError::WrongPointType {
                expected: format!("{length} point types"),
                found: format!("{} point types", point_types.len()),
            });
        }
        if matrices_position_number.len() != length {
            return Err(ShapeError::WrongContainerSize { expected: length, found: matrices_position_number.len() });
        }
        if matrices_position_sizes.len() != length {
            return Err(ShapeError::WrongContainerSize { expected: length, found: matrices_position_sizes.len() });
        }
        let mut matrices = Vec::with_capacity(length);
        for idx in 0..length {
            matrices.push(Matrix::new(
                matrices_position_number[idx],
                matrices_position_sizes[idx].clone(),
                point_types[idx],
            )?);
        }
        return Ok(Self {
            matrices_position_number,
            matrices_position_sizes,
            point_types,
            matrices,
        });
    }

    /// Replaces the matrix in the slot at `index`.
    ///
    /// Checks, in this order, the bounds, the matrix's length, its dimensionality and its position
    /// length profile.
    ///
    /// # Errors
    /// * [`ShapeError::IndexOutOfRange`] if `index` is not below the container's length
    /// * [`ShapeError::WrongMatrixSize`] if the matrix's length differs from the declared one
    /// * [`ShapeError::WrongPointType`] if the matrix's dimensionality differs from the declared one
    /// * [`ShapeError::WrongPositionSize`] if the matrix's position lengths differ from the declared ones
    pub(crate) fn set_matrix(&mut self, index: usize, matrix: Matrix<C>) -> Result<()> {
        if let Err(error) = self.validate_matrix(index, &matrix) {
            debug!("rejected matrix for slot {index}: {error}");
            return Err(error);
        }
        trace!("setting matrix {index}/{} with {} positions", self.len(), matrix.len());
        self.matrices[index] = matrix;
        return Ok(());
    }

    fn validate_matrix(&self, index: usize, matrix: &Matrix<C>) -> Result<()> {
        ShapeError::check_index(index, self.len())?;
        let declared_length = self.matrices_position_number[index];
        if matrix.len() != declared_length {
            return Err(ShapeError::wrong_matrix_size(declared_length, matrix.len()));
        }
        let declared_type = self.point_types[index];
        if matrix.point_type() != declared_type {
            return Err(ShapeError::wrong_point_type(declared_type, matrix.point_type()));
        }
        let declared_sizes = &self.matrices_position_sizes[index];
        if matrix.position_lengths() != declared_sizes.as_slice() {
            return Err(ShapeError::wrong_position_size(declared_sizes, matrix.position_lengths()));
        }
        return Ok(());
    }

    /// Declared number of matrices.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Declared number of positions for each matrix slot.
    pub fn matrices_position_number(&self) -> &[usize] {
        &self.matrices_position_number
    }

    /// Declared position length profile for each matrix slot.
    pub fn matrices_position_sizes(&self) -> &[Vec<usize>] {
        &self.matrices_position_sizes
    }

    /// Declared dimensionality for each matrix slot.
    pub fn point_types(&self) -> &[Dimensionality] {
        &self.point_types
    }

    pub fn matrices(&self) -> &[Matrix<C>] {
        &self.matrices
    }

    /// Returns the matrix at `index` or [`ShapeError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&Matrix<C>> {
        ShapeError::check_index(index, self.len())?;
        return Ok(&self.matrices[index]);
    }

    /// Iterates over all matrices in index order.
    pub fn iter(&self) -> Iter<'_, Matrix<C>> {
        self.matrices.iter()
    }
}


/// Panics if `index` is out of range.
impl<C: Coordinate> Index<usize> for Container<C> {
    type Output = Matrix<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.matrices[index]
    }
}


impl<'a, C: Coordinate> IntoIterator for &'a Container<C> {
    type Item = &'a Matrix<C>;
    type IntoIter = Iter<'a, Matrix<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::dimension::Dimensionality::*;

    fn two_slot_container() -> Container<f32> {
        Container::new(
            2,
            vec![2, 1],
            vec![vec![3, 4], vec![5]],
            vec![TwoDimensional, OneDimensional],
        ).unwrap()
    }

    #[test]
    fn test_new() {
        let container = two_slot_container();
        assert_eq!(container.len(), 2);
        assert_eq!(container.matrices_position_number(), &[2, 1]);
        assert_eq!(container.matrices_position_sizes(), &[vec![3, 4], vec![5]]);
        assert_eq!(container.point_types(), &[TwoDimensional, OneDimensional]);
        // Every slot is filled with a matrix of the declared shape.
        assert_eq!(container[0].position_lengths(), &[3, 4]);
        assert_eq!(container[0].point_type(), TwoDimensional);
        assert_eq!(container[1].position_lengths(), &[5]);
        assert_eq!(container.iter().count(), 2);
    }

    #[test]
    fn test_new_errors() {
        assert!(matches!(
            Container::<f32>::new(2, vec![1, 1], vec![vec![1], vec![1]], vec![OneDimensional]),
            Err(ShapeError::WrongPointType { .. })
        ));
        assert_eq!(
            Container::<f32>::new(2, vec![1], vec![vec![1], vec![1]], vec![OneDimensional; 2]),
            Err(ShapeError::WrongContainerSize { expected: 2, found: 1 }),
        );
        assert_eq!(
            Container::<f32>::new(2, vec![1, 1], vec![vec![1]; 3], vec![OneDimensional; 2]),
            Err(ShapeError::WrongContainerSize { expected: 2, found: 3 }),
        );
        assert!(matches!(
            Container::<f32>::new(1, vec![2], vec![vec![1]], vec![OneDimensional]),
            Err(ShapeError::WrongMatrixSize { .. })
        ));
    }

    #[test]
    fn test_set_matrix() {
        let mut container = two_slot_container();
        let matrix = Matrix::new(1, vec![5], OneDimensional).unwrap();
        container.set_matrix(1, matrix.clone()).unwrap();
        assert_eq!(container[1], matrix);
    }

    #[test]
    fn test_set_matrix_error_order() {
        let mut container = two_slot_container();
        // Bounds first.
        assert_eq!(
            container.set_matrix(2, Matrix::new(0, vec![], ThreeDimensional).unwrap()),
            Err(ShapeError::IndexOutOfRange { index: 2, length: 2 }),
        );
        // Length before point type.
        assert!(matches!(
            container.set_matrix(0, Matrix::new(1, vec![3], OneDimensional).unwrap()),
            Err(ShapeError::WrongMatrixSize { .. })
        ));
        // Point type before position lengths.
        assert!(matches!(
            container.set_matrix(0, Matrix::new(2, vec![4, 3], OneDimensional).unwrap()),
            Err(ShapeError::WrongPointType { .. })
        ));
        assert_eq!(
            container.set_matrix(0, Matrix::new(2, vec![4, 3], TwoDimensional).unwrap()),
            Err(ShapeError::wrong_position_size(vec![3, 4], vec![4, 3])),
        );
    }

    #[test]
    fn test_get() {
        let container = two_slot_container();
        assert_eq!(container.get(1).unwrap().len(), 1);
        assert_eq!(container.get(5), Err(ShapeError::IndexOutOfRange { index: 5, length: 2 }));
    }
}
