//! Definition of the `Matrix` struct.

use std::ops::Index;
use std::slice::Iter;

use log::{debug, trace};

use crate::coordinate::Coordinate;
use crate::dimension::Dimensionality;
use crate::error::{Result, ShapeError};
use crate::position::Position;


/// Ordered, fixed-length sequence of positions of one dimensionality.
///
/// Each position slot has its own declared length, fixed at construction. Slots are never absent:
/// a new matrix holds an empty position of the declared shape in every slot, and replacing one is
/// only possible with a position of exactly that shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<C: Coordinate> {
    point_type: Dimensionality,
    position_lengths: Vec<usize>,
    positions: Vec<Position<C>>,
}


impl<C: Coordinate> Matrix<C> {
    /// Constructs a new matrix with an empty position of the declared length in each slot.
    ///
    /// # Arguments
    /// * `length` - number of position slots
    /// * `position_lengths` - declared number of points for each position slot
    /// * `point_type` - dimensionality shared by all points in the matrix
    ///
    /// # Returns
    /// The new `Matrix` or [`ShapeError::WrongMatrixSize`] if `position_lengths` does not have
    /// exactly `length` entries.
    pub(crate) fn new(length: usize, position_lengths: Vec<usize>, point_type: Dimensionality) -> Result<Self> {
        if position_lengths.len() != length {
            return Err(ShapeError::wrong_matrix_size(length, position_lengths.len()));
        }
        let positions = position_lengths.iter()
            .map(|&position_length| Position::new(position_length, point_type))
            .collect();
        return Ok(Self { point_type, position_lengths, positions });
    }

    /// Replaces the position in the slot at `index`.
    ///
    /// Checks, in this order, the bounds, the position's dimensionality and its length.
    ///
    /// # Errors
    /// * [`ShapeError::IndexOutOfRange`] if `index` is not below the matrix's length
    /// * [`ShapeError::WrongPointType`] if the position's dimensionality differs from the matrix's
    /// * [`ShapeError::WrongPositionSize`] if the position's length differs from the declared one
    pub(crate) fn set_position(&mut self, index: usize, position: Position<C>) -> Result<()> {
        if let Err(error) = self.validate_position(index, &position) {
            debug!("rejected position for slot {index}: {error}");
            return Err(error);
        }
        trace!("setting position {index}/{} with {} points", self.len(), position.len());
        self.positions[index] = position;
        return Ok(());
    }

    fn validate_position(&self, index: usize, position: &Position<C>) -> Result<()> {
        ShapeError::check_index(index, self.len())?;
        if position.point_type() != self.point_type {
            return Err(ShapeError::wrong_point_type(self.point_type, position.point_type()));
        }
        let declared = self.position_lengths[index];
        if position.len() != declared {
            return Err(ShapeError::wrong_position_size(declared, position.len()));
        }
        return Ok(());
    }

    pub fn point_type(&self) -> Dimensionality {
        self.point_type
    }

    /// Declared number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Declared number of points for each position slot.
    pub fn position_lengths(&self) -> &[usize] {
        &self.position_lengths
    }

    pub fn positions(&self) -> &[Position<C>] {
        &self.positions
    }

    /// Returns the position at `index` or [`ShapeError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&Position<C>> {
        ShapeError::check_index(index, self.len())?;
        return Ok(&self.positions[index]);
    }

    /// Iterates over the positions in index order.
    ///
    /// Since no slot can be absent, this visits every slot.
    pub fn iter(&self) -> Iter<'_, Position<C>> {
        self.positions.iter()
    }
}


/// Panics if `index` is out of range.
impl<C: Coordinate> Index<usize> for Matrix<C> {
    type Output = Position<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.positions[index]
    }
}


impl<'a, C: Coordinate> IntoIterator for &'a Matrix<C> {
    type Item = &'a Position<C>;
    type IntoIter = Iter<'a, Position<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
