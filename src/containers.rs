//! Definition of the `Containers` struct.
//!
//! The top of the hierarchy: a growable collection of containers that all conform to one shape
//! template. Containers are held through [`Arc`] handles. Adding the same handle twice creates two
//! entries referring to one underlying container. Since an `Arc` only grants shared access, a
//! container can no longer be modified once it has been added.

use std::ops::Index;
use std::slice::Iter;
use std::sync::Arc;

use log::debug;

use crate::container::Container;
use crate::coordinate::Coordinate;
use crate::dimension::Dimensionality;
use crate::error::{Result, ShapeError};


/// Growable collection of containers sharing one declared shape template.
#[derive(Clone, Debug, PartialEq)]
pub struct Containers<C: Coordinate> {
    matrices_number: usize,
    point_types: Vec<Dimensionality>,
    matrix_lengths: Vec<usize>,
    matrices_position_sizes: Vec<Vec<usize>>,
    values: Vec<Arc<Container<C>>>,
}


impl<C: Coordinate> Containers<C> {
    /// Constructs an empty collection with the given shape template.
    ///
    /// # Arguments
    /// * `matrices_number` - number of matrices in every container
    /// * `matrix_lengths` - number of positions in each indexed matrix
    /// * `matrices_position_sizes` - number of points in each position of each indexed matrix
    /// * `point_types` - dimensionality of each indexed matrix
    ///
    /// # Errors
    /// * [`ShapeError::WrongContainerSize`] if any of the three template arrays does not have
    ///   `matrices_number` entries (checked in the order `point_types`, `matrix_lengths`,
    ///   `matrices_position_sizes`)
    /// * [`ShapeError::WrongMatrixSize`] if a position size profile does not have as many entries
    ///   as its matrix has positions
    pub(crate) fn new(
        matrices_number: usize,
        matrix_lengths: Vec<usize>,
        matrices_position_sizes: Vec<Vec<usize>>,
        point_types: Vec<Dimensionality>,
    ) -> Result<Self> {
        for found in [point_types.len(), matrix_lengths.len(), matrices_position_sizes.len()] {
            if found != matrices_number {
                return Err(ShapeError::WrongContainerSize { expected: matrices_number, found });
            }
        }
        for (sizes, &matrix_length) in matrices_position_sizes.iter().zip(&matrix_lengths) {
            if sizes.len() != matrix_length {
                return Err(ShapeError::wrong_matrix_size(matrix_length, sizes.len()));
            }
        }
        return Ok(Self {
            matrices_number,
            point_types,
            matrix_lengths,
            matrices_position_sizes,
            values: Vec::new(),
        });
    }

    /// Appends a container that conforms to the shape template.
    ///
    /// The container is stored by handle, not copied. Passing an owned [`Container`] wraps it in a
    /// new [`Arc`]; passing an existing `Arc` shares it.
    ///
    /// # Errors
    /// Checked in this order:
    /// * [`ShapeError::WrongPointType`] if the container's point types differ from the template's.
    ///   This also covers a container with the wrong number of matrices.
    /// * [`ShapeError::WrongMatrixSize`] if the container's matrix lengths differ from the template's
    /// * [`ShapeError::WrongPositionSize`] if any matrix's position lengths differ from the template's
    pub fn add_container(&mut self, container: impl Into<Arc<Container<C>>>) -> Result<()> {
        let container = container.into();
        if let Err(error) = self.validate_container(&container) {
            debug!("rejected container: {error}");
            return Err(error);
        }
        self.values.push(container);
        debug!("added container {}", self.values.len());
        return Ok(());
    }

    fn validate_container(&self, container: &Container<C>) -> Result<()> {
        if container.point_types() != self.point_types.as_slice() {
            return Err(ShapeError::wrong_point_type(&self.point_types, container.point_types()));
        }
        if container.matrices_position_number() != self.matrix_lengths.as_slice() {
            return Err(ShapeError::wrong_matrix_size(&self.matrix_lengths, container.matrices_position_number()));
        }
        if container.matrices_position_sizes() != self.matrices_position_sizes.as_slice() {
            return Err(ShapeError::wrong_position_size(
                &self.matrices_position_sizes,
                container.matrices_position_sizes(),
            ));
        }
        return Ok(());
    }

    /// Number of containers added so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of matrices every container must have.
    pub fn matrices_number(&self) -> usize {
        self.matrices_number
    }

    pub fn point_types(&self) -> &[Dimensionality] {
        &self.point_types
    }

    pub fn matrix_lengths(&self) -> &[usize] {
        &self.matrix_lengths
    }

    pub fn matrices_position_sizes(&self) -> &[Vec<usize>] {
        &self.matrices_position_sizes
    }

    pub fn values(&self) -> &[Arc<Container<C>>] {
        &self.values
    }

    /// Returns the container at `index` or [`ShapeError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&Arc<Container<C>>> {
        ShapeError::check_index(index, self.len())?;
        return Ok(&self.values[index]);
    }

    /// Iterates over the containers in the order they were added.
    pub fn iter(&self) -> Iter<'_, Arc<Container<C>>> {
        self.values.iter()
    }
}


/// Panics if `index` is out of range.
impl<C: Coordinate> Index<usize> for Containers<C> {
    type Output = Container<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}


impl<'a, C: Coordinate> IntoIterator for &'a Containers<C> {
    type Item = &'a Arc<Container<C>>;
    type IntoIter = Iter<'a, Arc<Container<C>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimensionality::*;

    fn template() -> Containers<u32> {
        Containers::new(
            2,
            vec![2, 1],
            vec![vec![3, 0], vec![4]],
            vec![ThreeDimensional, OneDimensional],
        ).unwrap()
    }

    fn container(
        matrices_position_number: Vec<usize>,
        matrices_position_sizes: Vec<Vec<usize>>,
        point_types: Vec<Dimensionality>,
    ) -> Container<u32> {
        Container::new(point_types.len(), matrices_position_number, matrices_position_sizes, point_types).unwrap()
    }

    fn matching_container() -> Container<u32> {
        container(vec![2, 1], vec![vec![3, 0], vec![4]], vec![ThreeDimensional, OneDimensional])
    }

    #[test]
    fn test_new() {
        let collection = template();
        assert_eq!(collection.len(), 0);
        assert!(collection.is_empty());
        assert_eq!(collection.matrices_number(), 2);
        assert_eq!(collection.matrix_lengths(), &[2, 1]);
        assert_eq!(collection.point_types(), &[ThreeDimensional, OneDimensional]);
        assert_eq!(collection.matrices_position_sizes(), &[vec![3, 0], vec![4]]);
        assert_eq!(collection.iter().count(), 0);
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(
            Containers::<u32>::new(2, vec![1, 1], vec![vec![0], vec![0]], vec![OneDimensional]),
            Err(ShapeError::WrongContainerSize { expected: 2, found: 1 }),
        );
        assert_eq!(
            Containers::<u32>::new(2, vec![1, 1, 1], vec![vec![0], vec![0]], vec![OneDimensional; 2]),
            Err(ShapeError::WrongContainerSize { expected: 2, found: 3 }),
        );
        assert_eq!(
            Containers::<u32>::new(2, vec![1, 1], vec![vec![0]], vec![OneDimensional; 2]),
            Err(ShapeError::WrongContainerSize { expected: 2, found: 1 }),
        );
        assert!(matches!(
            Containers::<u32>::new(2, vec![1, 1], vec![vec![0], vec![0, 0]], vec![OneDimensional; 2]),
            Err(ShapeError::WrongMatrixSize { .. })
        ));
    }

    #[test]
    fn test_new_empty_template() {
        let mut collection = Containers::<u32>::new(0, vec![], vec![], vec![]).unwrap();
        collection.add_container(container(vec![], vec![], vec![])).unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_add_container() {
        let mut collection = template();
        collection.add_container(matching_container()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0], matching_container());
        assert_eq!(collection.get(0).unwrap().len(), 2);
        assert!(collection.get(1).is_err());
    }

    #[test]
    fn test_add_same_container_twice() {
        let mut collection = template();
        let shared = Arc::new(matching_container());
        collection.add_container(Arc::clone(&shared)).unwrap();
        assert_eq!(collection.len(), 1);
        collection.add_container(Arc::clone(&shared)).unwrap();
        assert_eq!(collection.len(), 2);
        assert!(Arc::ptr_eq(&collection.values()[0], &collection.values()[1]));
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_add_container_wrong_point_types() {
        let mut collection = template();
        let result = collection.add_container(
            container(vec![2, 1], vec![vec![3, 0], vec![4]], vec![TwoDimensional, OneDimensional])
        );
        assert!(matches!(result, Err(ShapeError::WrongPointType { .. })));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_add_container_wrong_matrix_count() {
        let mut collection = template();
        let result = collection.add_container(container(vec![2], vec![vec![3, 0]], vec![ThreeDimensional]));
        assert!(matches!(result, Err(ShapeError::WrongPointType { .. })));
    }

    #[test]
    fn test_add_container_wrong_matrix_lengths() {
        let mut collection = template();
        // Wrong position sizes as well, but the matrix lengths are checked first.
        let result = collection.add_container(
            container(vec![2, 2], vec![vec![3, 0], vec![4, 4]], vec![ThreeDimensional, OneDimensional])
        );
        assert!(matches!(result, Err(ShapeError::WrongMatrixSize { .. })));
    }

    #[test]
    fn test_add_container_wrong_position_sizes() {
        let mut collection = template();
        let result = collection.add_container(
            container(vec![2, 1], vec![vec![3, 1], vec![4]], vec![ThreeDimensional, OneDimensional])
        );
        assert!(matches!(result, Err(ShapeError::WrongPositionSize { .. })));
        assert_eq!(collection.len(), 0);
    }
}
