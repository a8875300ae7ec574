//! Tests for per-level statistics

#[cfg(test)]
mod tests {

    use crate::grid_from_rows;
    use gridcrawl::algorithm::layout::{LayoutConfig, generate_layout};
    use gridcrawl::analysis::summary::LevelSummary;
    use gridcrawl::spatial::Grid;
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    // Tests counts on a hand-built grid
    #[test]
    fn test_summary_counts() {
        let mut grid = grid_from_rows(&["..#", "#.#", "..."]);
        grid.set_start([0, 0]).unwrap();

        let summary = LevelSummary::from_grid(&grid);

        assert_eq!(summary.dimensions, (3, 3));
        assert_eq!(summary.open_cells, 6);
        assert_eq!(summary.wall_cells, 3);
        assert_eq!(summary.room_cells, 6);
        assert_eq!(summary.corridor_only_cells, 0);
        assert_eq!(summary.components, 1);
        assert!((summary.open_ratio() - 6.0 / 9.0).abs() < f64::EPSILON);
    }

    // Tests corridor cells are counted only outside rooms
    #[test]
    fn test_corridor_only_cells() {
        let rooms = array![[true, true, false, false]];
        let corridors = array![[false, true, true, false]];
        let grid = Grid::from_layers(rooms, corridors, vec![[0, 0]]);

        let summary = LevelSummary::from_grid(&grid);

        assert_eq!(summary.rooms, 1);
        assert_eq!(summary.room_cells, 2);
        assert_eq!(summary.corridor_only_cells, 1);
        assert_eq!(summary.open_cells, 3);
    }

    // Tests an empty grid reports a zero open ratio
    #[test]
    fn test_empty_grid_ratio() {
        let summary = LevelSummary::from_grid(&Grid::new(0, 0));

        assert!(summary.open_ratio().abs() < f64::EPSILON);
    }

    // Tests a generated level summarises as one component with every room
    #[test]
    fn test_generated_level_summary() {
        let layout = LayoutConfig {
            room_columns: 2,
            room_rows: 2,
            ..LayoutConfig::default()
        };
        let grid = generate_layout(40, 40, &layout, &mut StdRng::seed_from_u64(2)).unwrap();

        let summary = LevelSummary::from_grid(&grid);

        assert_eq!(summary.rooms, 4);
        assert_eq!(summary.components, 1);
        assert!(summary.corridor_only_cells > 0);
        assert!(summary.to_string().contains("4 rooms"));
        assert!(summary.to_string().contains("1 component(s)"));
    }
}
