//! Exact open-spot check for a single card.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{OccupancyMatrix, Rectangle};

/// Whether `candidate`'s exact footprint is free among `existing` cards.
///
/// The candidate never collides with its own current footprint. Advisory
/// only: nothing is mutated, and invalid input (a zero `column_count`, an
/// empty card) yields `false` rather than an error.
pub fn is_open(candidate: &Rectangle, existing: &[Rectangle], column_count: u32) -> bool {
    if candidate.width == 0 || candidate.height == 0 || !candidate.fits_columns(column_count) {
        trace!(card = %candidate.id, column_count, "Candidate outside the grid");
        return false;
    }

    let excluding: HashSet<_> = [candidate.id].into_iter().collect();
    let matrix = match OccupancyMatrix::build(existing, &excluding, column_count) {
        Ok(matrix) => matrix,
        Err(err) => {
            debug!(card = %candidate.id, %err, "Spot check on an invalid grid");
            return false;
        }
    };

    matrix.is_region_free(candidate.row, candidate.col, candidate.width, candidate.height)
}
