//! Definition of the `Position` struct.
//!
//! A position is a fixed number of point slots sharing one dimensionality. Slots start out unset
//! and are filled one by one through a validating setter.

use std::iter::FusedIterator;
use std::ops::Index;
use std::slice::Iter;

use log::{debug, trace};

use crate::coordinate::Coordinate;
use crate::dimension::Dimensionality;
use crate::error::{Result, ShapeError};
use crate::point::Point;


/// Ordered, fixed-length sequence of points of one dimensionality.
#[derive(Clone, Debug, PartialEq)]
pub struct Position<C: Coordinate> {
    point_type: Dimensionality,
    /// `None` marks a slot that has not been set yet.
    points: Vec<Option<Point<C>>>,
}


impl<C: Coordinate> Position<C> {
    /// Constructs a position with `length` unset slots.
    pub(crate) fn new(length: usize, point_type: Dimensionality) -> Self {
        return Self {
            point_type,
            points: vec![None; length],
        }
    }

    /// Stores a copy of `point` in the slot at `index`.
    ///
    /// Checks the bounds first, then the point's dimensionality.
    ///
    /// # Errors
    /// * [`ShapeError::IndexOutOfRange`] if `index` is not below the position's length
    /// * [`ShapeError::WrongPointType`] if the point's dimensionality differs from the position's
    pub(crate) fn set_point(&mut self, index: usize, point: &Point<C>) -> Result<()> {
        if let Err(error) = self.validate_point(index, point) {
            debug!("rejected point for slot {index}: {error}");
            return Err(error);
        }
        trace!("setting point {index}/{}", self.len());
        self.points[index] = Some(point.clone());
        return Ok(());
    }

    fn validate_point(&self, index: usize, point: &Point<C>) -> Result<()> {
        ShapeError::check_index(index, self.len())?;
        if point.point_type() != self.point_type {
            return Err(ShapeError::wrong_point_type(self.point_type, point.point_type()));
        }
        return Ok(());
    }

    pub fn point_type(&self) -> Dimensionality {
        self.point_type
    }

    /// Declared number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All slots, including unset ones.
    pub fn points(&self) -> &[Option<Point<C>>] {
        &self.points
    }

    /// Returns the point at `index`, or `None` if that slot is still unset.
    ///
    /// # Errors
    /// [`ShapeError::IndexOutOfRange`] if `index` is not below the position's length.
    pub fn get(&self, index: usize) -> Result<Option<&Point<C>>> {
        ShapeError::check_index(index, self.len())?;
        return Ok(self.points[index].as_ref());
    }

    /// Iterates over the points in index order, stopping at the first unset slot.
    ///
    /// Points after an unset slot are never visited, even if they are set.
    pub fn iter(&self) -> Points<'_, C> {
        Points { slots: self.points.iter() }
    }
}


/// Panics if `index` is out of range or the slot is unset.
impl<C: Coordinate> Index<usize> for Position<C> {
    type Output = Point<C>;

    fn index(&self, index: usize) -> &Self::Output {
        match &self.points[index] {
            Some(point) => point,
            None => panic!("point slot {index} is unset"),
        }
    }
}


impl<'a, C: Coordinate> IntoIterator for &'a Position<C> {
    type Item = &'a Point<C>;
    type IntoIter = Points<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// Prefix scan over the set points of a [`Position`].
///
/// Created by [`Position::iter`]. Once an unset slot is reached the iterator is exhausted for good.
#[derive(Clone, Debug)]
pub struct Points<'a, C: Coordinate> {
    slots: Iter<'a, Option<Point<C>>>,
}


impl<'a, C: Coordinate> Iterator for Points<'a, C> {
    type Item = &'a Point<C>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.slots.next() {
            Some(Some(point)) => Some(point),
            _ => {
                self.slots = [].iter();
                None
            }
        }
    }
}


impl<C: Coordinate> FusedIterator for Points<'_, C> {}
