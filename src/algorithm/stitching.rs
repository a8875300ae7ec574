//! Joins per-room corridor stubs across partition boundaries
//!
//! After stub carving, the column just left of an internal column boundary
//! holds exactly one open stub cell per row band (the right stub of the room
//! on that side), and the column just right of it holds the left stub of the
//! next room. A straight segment along the boundary column links the two.
//! Row boundaries are handled the same way with the axes swapped.

use ndarray::Array2;

use crate::algorithm::layout::carve;
use crate::algorithm::partition::Partition;
use crate::io::error::{Result, invalid_configuration};

fn open_at(corridors: &Array2<bool>, row: usize, col: usize) -> bool {
    corridors.get([row, col]).copied().unwrap_or(false)
}

/// Join stubs across every internal column boundary
///
/// Returns the number of segments carved.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if a row band has no stub next to a
/// boundary, which means the partition was too narrow for its rooms
pub fn stitch_columns(corridors: &mut Array2<bool>, partition: &Partition) -> Result<usize> {
    let mut segments = 0;
    for &boundary in partition.internal_col_bounds() {
        for band in partition.row_bands() {
            let left_col = boundary.checked_sub(1);
            let right_col = boundary + 1;

            let left = left_col.and_then(|col| band.clone().find(|&row| open_at(corridors, row, col)));
            let right = band.clone().find(|&row| open_at(corridors, row, right_col));

            let (Some(left), Some(right)) = (left, right) else {
                return Err(invalid_configuration(
                    "room_columns",
                    &partition.room_cols(),
                    &format!(
                        "no corridor stub meets column boundary {boundary} in rows {}..{}",
                        band.start, band.end
                    ),
                ));
            };

            carve(corridors, left.min(right)..left.max(right) + 1, boundary..boundary + 1);
            segments += 1;
        }
    }
    Ok(segments)
}

/// Join stubs across every internal row boundary
///
/// Returns the number of segments carved.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if a column band has no stub next to a
/// boundary, which means the partition was too short for its rooms
pub fn stitch_rows(corridors: &mut Array2<bool>, partition: &Partition) -> Result<usize> {
    let mut segments = 0;
    for &boundary in partition.internal_row_bounds() {
        for band in partition.col_bands() {
            let upper_row = boundary.checked_sub(1);
            let lower_row = boundary + 1;

            let upper = upper_row.and_then(|row| band.clone().find(|&col| open_at(corridors, row, col)));
            let lower = band.clone().find(|&col| open_at(corridors, lower_row, col));

            let (Some(upper), Some(lower)) = (upper, lower) else {
                return Err(invalid_configuration(
                    "room_rows",
                    &partition.room_rows(),
                    &format!(
                        "no corridor stub meets row boundary {boundary} in columns {}..{}",
                        band.start, band.end
                    ),
                ));
            };

            carve(corridors, boundary..boundary + 1, upper.min(lower)..upper.max(lower) + 1);
            segments += 1;
        }
    }
    Ok(segments)
}
