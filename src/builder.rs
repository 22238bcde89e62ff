//! Construction entry points for the whole hierarchy.
//!
//! These functions are the only way to obtain populated entities from outside the crate. Each one
//! infers the shape from its input, constructs the entity with that shape and then fills it
//! through the entity's validating setter, so no partially populated entity ever escapes.

use log::trace;
use ndarray::ArrayView2;

use crate::container::Container;
use crate::containers::Containers;
use crate::coordinate::Coordinate;
use crate::dimension::Dimensionality;
use crate::error::{Result, ShapeError};
use crate::matrix::Matrix;
use crate::point::Point;
use crate::position::Position;


/// Creates an empty collection of containers with the given shape template.
///
/// # Arguments
/// * `matrices_number` - number of matrices in every container
/// * `matrix_lengths` - number of positions in each indexed matrix
/// * `matrix_position_sizes` - number of points in each position of each indexed matrix
/// * `point_types` - dimensionality of each indexed matrix
///
/// # Returns
/// The empty `Containers` or the first violated shape rule (see [`Containers::add_container`]
/// for what the template is then used for).
pub fn create_container_collection<C: Coordinate>(
    matrices_number: usize,
    matrix_lengths: Vec<usize>,
    matrix_position_sizes: Vec<Vec<usize>>,
    point_types: Vec<Dimensionality>,
) -> Result<Containers<C>> {
    trace!("creating container collection of {matrices_number} matrices");
    return Containers::new(matrices_number, matrix_lengths, matrix_position_sizes, point_types);
}


/// Creates a fully populated position from a 2D coordinate array.
///
/// Each row is one point, the number of columns is the dimensionality. A zero-row array yields
/// an empty position that still carries the dimensionality given by its columns.
///
/// # Arguments
/// * `coordinates` - `[points, dimensionality]` shaped array, e.g. `&Array2<C>` or an `ArrayView2`
///
/// # Returns
/// The new `Position` or [`ShapeError::ShapeMismatch`] if the number of columns is not 1, 2 or 3.
pub fn create_position<'a, C: Coordinate + 'a>(coordinates: impl Into<ArrayView2<'a, C>>) -> Result<Position<C>> {
    let coordinates = coordinates.into();
    let point_type = Dimensionality::try_from(coordinates.ncols())?;
    trace!("creating position of {} points with dimensionality {point_type}", coordinates.nrows());
    let mut position = Position::new(coordinates.nrows(), point_type);
    for (idx, row) in coordinates.rows().into_iter().enumerate() {
        position.set_point(idx, &Point::new(point_type, &row.to_vec())?)?;
    }
    return Ok(position);
}


/// Creates a fully populated position from a slice of fixed-size coordinate rows.
///
/// Same as [`create_position`], with the dimensionality taken from the row length `D`.
pub fn create_position_from_rows<C: Coordinate, const D: usize>(rows: &[[C; D]]) -> Result<Position<C>> {
    let point_type = Dimensionality::try_from(D)?;
    trace!("creating position of {} points with dimensionality {point_type}", rows.len());
    let mut position = Position::new(rows.len(), point_type);
    for (idx, row) in rows.iter().enumerate() {
        position.set_point(idx, &Point::new(point_type, row)?)?;
    }
    return Ok(position);
}


/// Creates a matrix holding the given positions.
///
/// The matrix's dimensionality is taken from the first position, its position length profile
/// from the lengths of all positions.
///
/// # Errors
/// * [`ShapeError::WrongMatrixSize`] if `positions` is empty, since there is nothing to infer the
///   dimensionality from
/// * [`ShapeError::WrongPointType`] if the positions do not all share one dimensionality
pub fn create_matrix<C: Coordinate>(positions: Vec<Position<C>>) -> Result<Matrix<C>> {
    let Some(first) = positions.first() else {
        return Err(ShapeError::WrongMatrixSize {
            expected: "at least one position".to_owned(),
            found: "none".to_owned(),
        });
    };
    let point_type = first.point_type();
    let position_lengths: Vec<usize> = positions.iter().map(Position::len).collect();
    trace!("creating matrix of {} positions with dimensionality {point_type}", positions.len());
    let mut matrix = Matrix::new(positions.len(), position_lengths, point_type)?;
    for (idx, position) in positions.into_iter().enumerate() {
        matrix.set_position(idx, position)?;
    }
    return Ok(matrix);
}


/// Creates a container holding the given matrices.
///
/// The container's shape is taken from the length, position length profile and dimensionality of
/// each matrix. An empty `matrices` vector yields an empty container.
pub fn create_container<C: Coordinate>(matrices: Vec<Matrix<C>>) -> Result<Container<C>> {
    let matrices_position_number = matrices.iter().map(Matrix::len).collect();
    let matrices_position_sizes = matrices.iter().map(|matrix| matrix.position_lengths().to_vec()).collect();
    let point_types = matrices.iter().map(Matrix::point_type).collect();
    trace!("creating container of {} matrices", matrices.len());
    let mut container = Container::new(matrices.len(), matrices_position_number, matrices_position_sizes, point_types)?;
    for (idx, matrix) in matrices.into_iter().enumerate() {
        container.set_matrix(idx, matrix)?;
    }
    return Ok(container);
}
