//! Definition of the `Point` struct.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Index;

use crate::coordinate::Coordinate;
use crate::dimension::Dimensionality;
use crate::error::{Result, ShapeError};


/// Immutable tuple of coordinates tagged with its dimensionality.
///
/// The number of coordinates always equals `point_type.count()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<C: Coordinate> {
    point_type: Dimensionality,
    coordinates: Vec<C>,
}


impl<C: Coordinate> Point<C> {
    /// Constructs a new point by copying `coordinates`.
    ///
    /// # Arguments
    /// * `point_type` - dimensionality of the new point
    /// * `coordinates` - exactly `point_type.count()` coordinate values
    ///
    /// # Returns
    /// The new `Point` or [`ShapeError::ShapeMismatch`] if the number of coordinates is wrong.
    pub(crate) fn new(point_type: Dimensionality, coordinates: &[C]) -> Result<Self> {
        if coordinates.len() != point_type.count() {
            return Err(ShapeError::ShapeMismatch {
                expected: point_type.count().to_string(),
                found: coordinates.len(),
            });
        }
        return Ok(Self { point_type, coordinates: coordinates.to_vec() });
    }

    pub fn point_type(&self) -> Dimensionality {
        self.point_type
    }

    pub fn coordinates(&self) -> &[C] {
        &self.coordinates
    }

    /// Returns the coordinate at `index` or [`ShapeError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<C> {
        ShapeError::check_index(index, self.point_type.count())?;
        return Ok(self.coordinates[index]);
    }
}


/// Panics if `index` is not below the point's dimensionality.
impl<C: Coordinate> Index<usize> for Point<C> {
    type Output = C;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}


/// Formats the point as a parenthesized, comma separated coordinate list, e.g. `(0, 1)`.
impl<C: Coordinate + Display> Display for Point<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        for (idx, coordinate) in self.coordinates.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coordinate}")?;
        }
        write!(f, ")")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let point = Point::new(Dimensionality::ThreeDimensional, &[1, 2, 3]).unwrap();
        assert_eq!(point.point_type(), Dimensionality::ThreeDimensional);
        assert_eq!(point.coordinates(), &[1, 2, 3]);
    }

    #[test]
    fn test_new_wrong_count() {
        let result = Point::new(Dimensionality::TwoDimensional, &[1.5, 2.5, 3.5]);
        assert_eq!(
            result,
            Err(ShapeError::ShapeMismatch { expected: "2".to_owned(), found: 3 }),
        );
        assert!(Point::<u8>::new(Dimensionality::OneDimensional, &[]).is_err());
    }

    #[test]
    fn test_get() {
        let point = Point::new(Dimensionality::TwoDimensional, &[7, 8]).unwrap();
        assert_eq!(point.get(0), Ok(7));
        assert_eq!(point.get(1), Ok(8));
        assert_eq!(point.get(2), Err(ShapeError::IndexOutOfRange { index: 2, length: 2 }));
        assert_eq!(point[1], 8);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let point = Point::new(Dimensionality::OneDimensional, &[7]).unwrap();
        let _coordinate = point[1];
    }

    #[test]
    fn test_display() {
        let point = Point::new(Dimensionality::TwoDimensional, &[0, 1]).unwrap();
        assert_eq!(point.to_string(), "(0, 1)");
        let point = Point::new(Dimensionality::OneDimensional, &[2.5]).unwrap();
        assert_eq!(point.to_string(), "(2.5)");
    }
}
