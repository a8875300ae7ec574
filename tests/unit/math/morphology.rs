//! Tests for structuring elements and neighborhood filters

#[cfg(test)]
mod tests {

    use gridcrawl::math::morphology::{
        Footprint, dilate, erode, grow, maximum_filter, minimum_filter,
    };
    use ndarray::{Array2, array};

    fn single(dimensions: (usize, usize), position: [usize; 2]) -> Array2<bool> {
        let mut mask = Array2::from_elem(dimensions, false);
        if let Some(cell) = mask.get_mut(position) {
            *cell = true;
        }
        mask
    }

    fn set_cells(mask: &Array2<bool>) -> Vec<[usize; 2]> {
        mask.indexed_iter()
            .filter(|(_, open)| **open)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    // Tests the plus element holds the origin and its four neighbors
    #[test]
    fn test_plus_footprint() {
        let plus = Footprint::plus();

        assert_eq!(plus.offsets().len(), 5);
        assert!(plus.offsets().contains(&[0, 0]));
        assert!(plus.offsets().contains(&[-1, 0]));
        assert!(plus.offsets().contains(&[0, 1]));
        assert!(!plus.offsets().contains(&[1, 1]));
    }

    // Tests odd boxes are centered and even boxes lean down and right
    #[test]
    fn test_square_footprint_offsets() {
        let three = Footprint::square(3);
        let two = Footprint::square(2);

        assert_eq!(three.offsets().len(), 9);
        assert!(three.offsets().contains(&[-1, -1]));
        assert!(three.offsets().contains(&[1, 1]));
        assert_eq!(two.offsets(), &[[0, 0], [0, 1], [1, 0], [1, 1]]);
        assert_eq!(Footprint::square(0).offsets(), &[[0, 0]]);
    }

    // Tests neighborhoods are clipped at the grid corner
    #[test]
    fn test_neighborhood_clipped_at_corner() {
        let plus = Footprint::plus();

        let cells: Vec<_> = plus.neighborhood(0, 0, (3, 3)).collect();

        assert_eq!(cells.len(), 3);
        assert!(cells.contains(&[0, 0]));
        assert!(cells.contains(&[1, 0]));
        assert!(cells.contains(&[0, 1]));
    }

    // Tests dilation with the plus element grows a point into a cross
    #[test]
    fn test_dilate_plus_makes_cross() {
        let mask = single((5, 5), [2, 2]);

        let grown = dilate(&mask, &Footprint::plus());

        assert_eq!(
            set_cells(&grown),
            vec![[1, 2], [2, 1], [2, 2], [2, 3], [3, 2]]
        );
    }

    // Tests erosion removes cells whose plus neighborhood is not fully set
    #[test]
    fn test_erode_plus_keeps_interior() {
        let mask = Array2::from_elem((3, 3), true);
        let mut holed = mask.clone();
        if let Some(cell) = holed.get_mut([0, 1]) {
            *cell = false;
        }

        let eroded = erode(&holed, &Footprint::plus());

        // Edges are clipped rather than padded, so only the hole's neighbors drop
        assert_eq!(eroded.get([1, 1]), Some(&false));
        assert_eq!(eroded.get([0, 0]), Some(&false));
        assert_eq!(eroded.get([2, 2]), Some(&true));
        assert_eq!(erode(&mask, &Footprint::plus()), mask);
    }

    // Tests numeric filters pick extremes under the footprint
    #[test]
    fn test_min_max_filters() {
        let values = array![[5_u32, 1, 9], [4, 7, 2], [8, 3, 6]];
        let plus = Footprint::plus();

        let lowest = minimum_filter(&values, &plus);
        let highest = maximum_filter(&values, &plus);

        assert_eq!(lowest.get([1, 1]), Some(&1));
        assert_eq!(lowest.get([0, 0]), Some(&1));
        assert_eq!(highest.get([1, 1]), Some(&7));
        assert_eq!(highest.get([2, 2]), Some(&6));
        assert_eq!(highest.get([0, 1]), Some(&9));
    }

    // Tests widening by one leaves the mask unchanged
    #[test]
    fn test_grow_by_one_is_identity() {
        let mask = single((4, 4), [1, 2]);

        assert_eq!(grow(&mask, 1), mask);
        assert_eq!(grow(&mask, 0), mask);
    }

    // Tests an odd width spreads a point evenly on both sides
    #[test]
    fn test_grow_odd_width() {
        let mask = single((7, 7), [3, 3]);

        let grown = grow(&mask, 3);

        assert_eq!(grown.iter().filter(|&&open| open).count(), 9);
        assert_eq!(grown.get([2, 2]), Some(&true));
        assert_eq!(grown.get([4, 4]), Some(&true));
        assert_eq!(grown.get([5, 3]), Some(&false));
    }

    // Tests an even width covers size/2 cells before the point and the rest after
    #[test]
    fn test_grow_even_width() {
        let mask = single((7, 7), [3, 3]);

        let grown = grow(&mask, 2);

        assert_eq!(set_cells(&grown), vec![[2, 2], [2, 3], [3, 2], [3, 3]]);
    }

    // Tests widening is clamped at the grid edge instead of wrapping
    #[test]
    fn test_grow_clamps_at_edge() {
        let mask = single((5, 5), [0, 0]);

        let grown = grow(&mask, 3);

        assert_eq!(set_cells(&grown), vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
        assert_eq!(grown.get([4, 4]), Some(&false));
    }
}
