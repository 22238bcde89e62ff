//! The [`Dimensionality`] shape tag shared by points, positions, matrices and containers.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::ShapeError;


/// Number of coordinates in a point.
///
/// This is the single shape tag threaded through [`Point`], [`Position`], [`Matrix`] and
/// [`Container`]. Only one, two and three dimensions are supported.
///
/// [`Point`]: crate::point::Point
/// [`Position`]: crate::position::Position
/// [`Matrix`]: crate::matrix::Matrix
/// [`Container`]: crate::container::Container
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Dimensionality {
    OneDimensional = 1,
    TwoDimensional = 2,
    ThreeDimensional = 3,
}


impl Dimensionality {
    /// All supported dimensionalities in ascending order.
    pub const ALL: [Dimensionality; 3] = [
        Dimensionality::OneDimensional,
        Dimensionality::TwoDimensional,
        Dimensionality::ThreeDimensional,
    ];

    /// Returns the number of coordinates a point of this dimensionality has.
    pub fn count(self) -> usize {
        return self as usize;
    }
}


/// Converts a coordinate count into a `Dimensionality`.
///
/// Counts outside of `1..=3` yield [`ShapeError::ShapeMismatch`].
impl TryFrom<usize> for Dimensionality {
    type Error = ShapeError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Dimensionality::OneDimensional),
            2 => Ok(Dimensionality::TwoDimensional),
            3 => Ok(Dimensionality::ThreeDimensional),
            _ => Err(ShapeError::ShapeMismatch { expected: "1, 2 or 3".to_owned(), found: count }),
        }
    }
}


impl From<Dimensionality> for usize {
    fn from(dimensionality: Dimensionality) -> Self {
        dimensionality.count()
    }
}


impl Display for Dimensionality {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.count())
    }
}
