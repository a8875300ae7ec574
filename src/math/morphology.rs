//! Neighborhood reductions over 2D grids
//!
//! A [`Footprint`] is a structuring element: the set of offsets, relative to
//! each cell, that a filter looks at. Offsets falling outside the grid are
//! skipped rather than wrapped or padded. Every footprint contains the origin,
//! so a reduction always has at least one value to work with.

use ndarray::{Array2, Zip};

/// Structuring element given as a list of `[row, col]` offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    offsets: Vec<[isize; 2]>,
}

impl Footprint {
    /// Plus-shaped 3x3 element: the cell and its four orthogonal neighbors
    pub fn plus() -> Self {
        Self {
            offsets: vec![[0, 0], [-1, 0], [1, 0], [0, -1], [0, 1]],
        }
    }

    /// Full `size x size` box
    ///
    /// Odd sizes are centered. Even sizes reach one cell further down and
    /// right, so a dilation spreads each set cell over
    /// `[p - size/2, p - size/2 + size)` on both axes. A size of zero is
    /// treated as one.
    pub fn square(size: usize) -> Self {
        let size = size.max(1) as isize;
        let last = size / 2;
        let first = last + 1 - size;
        let mut offsets = Vec::with_capacity((size * size) as usize);
        for dr in first..=last {
            for dc in first..=last {
                offsets.push([dr, dc]);
            }
        }
        Self { offsets }
    }

    /// Offsets making up the element
    pub fn offsets(&self) -> &[[isize; 2]] {
        &self.offsets
    }

    /// Positions covered by the element centered at `[row, col]`, clipped to the grid
    pub fn neighborhood(
        &self,
        row: usize,
        col: usize,
        dimensions: (usize, usize),
    ) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.offsets.iter().filter_map(move |&[dr, dc]| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < dimensions.0 && c < dimensions.1).then_some([r, c])
        })
    }
}

fn reduce<T, F>(input: &Array2<T>, footprint: &Footprint, pick: F) -> Array2<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let dimensions = input.dim();
    Zip::indexed(input).map_collect(|(row, col), &center| {
        footprint
            .neighborhood(row, col, dimensions)
            .filter_map(|index| input.get(index).copied())
            .fold(center, &pick)
    })
}

/// Replace every cell with the largest value under the footprint
pub fn maximum_filter<T>(input: &Array2<T>, footprint: &Footprint) -> Array2<T>
where
    T: Copy + PartialOrd,
{
    reduce(input, footprint, |a, b| if b > a { b } else { a })
}

/// Replace every cell with the smallest value under the footprint
pub fn minimum_filter<T>(input: &Array2<T>, footprint: &Footprint) -> Array2<T>
where
    T: Copy + PartialOrd,
{
    reduce(input, footprint, |a, b| if b < a { b } else { a })
}

/// Binary dilation: a cell is set when any cell under the footprint is set
pub fn dilate(mask: &Array2<bool>, footprint: &Footprint) -> Array2<bool> {
    maximum_filter(mask, footprint)
}

/// Binary erosion: a cell stays set only when every cell under the footprint is set
pub fn erode(mask: &Array2<bool>, footprint: &Footprint) -> Array2<bool> {
    minimum_filter(mask, footprint)
}

/// Widen every open region of a mask to `size` cells using a box dilation
///
/// Sizes of one or less return the mask unchanged. Growth is clamped at the
/// grid edges.
pub fn grow(mask: &Array2<bool>, size: usize) -> Array2<bool> {
    if size <= 1 {
        return mask.clone();
    }
    dilate(mask, &Footprint::square(size))
}
