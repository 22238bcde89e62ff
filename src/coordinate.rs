//! Definition of the `Coordinate` trait.

use std::fmt::Debug;


/// Coordinate value stored in a [`Point`](crate::point::Point).
///
/// No arithmetic is assumed; coordinates are only ever copied around.
pub trait Coordinate:
    Copy
    + Debug
{}


/// Generic implementation of the trait for any type that satisfies the `Coordinate` bounds:
impl<C> Coordinate for C
where C:
    Copy
    + Debug
{}


#[cfg(test)]
mod tests {
    use super::*;

    fn first<C: Coordinate>(coordinates: &[C]) -> C {
        return coordinates[0];
    }

    #[test]
    fn test_blanket_impl() {
        assert_eq!(first(&[1_i32, 2]), 1);
        assert_eq!(first(&[0.5_f64]), 0.5);
        assert_eq!(first(&['x', 'y']), 'x');
    }
}
