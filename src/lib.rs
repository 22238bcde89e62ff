//! Shape-validated hierarchical storage for point data.
//!
//! Points are grouped into positions, positions into matrices, matrices into containers and
//! containers into a top-level collection. Every level declares the shape of its children up
//! front and rejects anything that does not match, so code traversing a populated structure can
//! rely on a uniform shape without checking it again.
//!
//! Populated entities are obtained through the functions in [`builder`].

pub mod builder;
pub mod container;
pub mod containers;
pub mod coordinate;
pub mod dimension;
pub mod error;
pub mod matrix;
pub mod point;
pub mod position;

pub use container::Container;
pub use containers::Containers;
pub use dimension::Dimensionality;
pub use error::ShapeError;
pub use matrix::Matrix;
pub use point::Point;
pub use position::Position;
