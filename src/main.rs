//! Builds a sample dataset and prints its whole hierarchy.
//!
//! Log output is controlled through `RUST_LOG` (warnings only by default).

use std::error::Error;
use std::sync::Arc;

use env_logger::Env;
use log::info;
use ndarray::Array2;
use num_traits::FromPrimitive;

use pointstore::builder::{create_container, create_container_collection, create_matrix, create_position};
use pointstore::coordinate::Coordinate;
use pointstore::{Containers, Dimensionality, Matrix};


/// Number of positions in each matrix of the sample container.
const POSITIONS_PER_MATRIX: usize = 100;

/// Lengths of the leading, non-empty positions of the two-dimensional matrix.
const PLANAR_LENGTHS: [usize; 2] = [50, 200];

/// Lengths of the leading, non-empty positions of the one-dimensional matrix.
const LINEAR_LENGTHS: [usize; 2] = [1, 1];

/// How many times the same container is added to the collection.
const APPEND_COUNT: usize = 3;


/// Returns a `[rows, dimensionality]` array whose row `i` is `(i, i + 1, ...)`.
fn staircase<C: Coordinate + FromPrimitive>(rows: usize, dimensionality: Dimensionality) -> Option<Array2<C>> {
    let columns = dimensionality.count();
    let values = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| row + column))
        .map(C::from_usize)
        .collect::<Option<Vec<C>>>()?;
    return Array2::from_shape_vec((rows, columns), values).ok();
}


/// Builds a matrix of `POSITIONS_PER_MATRIX` positions, the first ones with the given lengths and
/// the rest empty.
fn sample_matrix<C: Coordinate + FromPrimitive>(
    leading_lengths: &[usize],
    dimensionality: Dimensionality,
) -> Result<Matrix<C>, Box<dyn Error>> {
    let mut positions = Vec::with_capacity(POSITIONS_PER_MATRIX);
    for idx in 0..POSITIONS_PER_MATRIX {
        let rows = leading_lengths.get(idx).copied().unwrap_or(0);
        let coordinates = staircase::<C>(rows, dimensionality).ok_or("coordinate out of range")?;
        positions.push(create_position(&coordinates)?);
    }
    return Ok(create_matrix(positions)?);
}


/// Declared position lengths of a sample matrix: the leading lengths followed by zeros.
fn sample_profile(leading_lengths: &[usize]) -> Vec<usize> {
    let mut profile = vec![0; POSITIONS_PER_MATRIX];
    profile[..leading_lengths.len()].copy_from_slice(leading_lengths);
    return profile;
}


fn print_dataset<C: Coordinate + std::fmt::Display>(dataset: &Containers<C>) {
    for container in dataset {
        println!("{} matrices", container.len());
        for matrix in container.iter() {
            println!("{} positions", matrix.len());
            for position in matrix {
                println!("{} points of {} dimension", position.len(), position.point_type());
                for point in position {
                    println!("Point : {point}");
                }
            }
        }
    }
}


fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let planar = sample_matrix::<f64>(&PLANAR_LENGTHS, Dimensionality::TwoDimensional)?;
    let linear = sample_matrix::<f64>(&LINEAR_LENGTHS, Dimensionality::OneDimensional)?;
    let container = Arc::new(create_container(vec![planar, linear])?);

    let mut dataset = create_container_collection(
        2,
        vec![POSITIONS_PER_MATRIX, POSITIONS_PER_MATRIX],
        vec![sample_profile(&PLANAR_LENGTHS), sample_profile(&LINEAR_LENGTHS)],
        vec![Dimensionality::TwoDimensional, Dimensionality::OneDimensional],
    )?;
    for _ in 0..APPEND_COUNT {
        dataset.add_container(Arc::clone(&container))?;
    }
    info!("dataset holds {} containers", dataset.len());

    print_dataset(&dataset);
    return Ok(());
}
