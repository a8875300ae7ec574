//! Tests for cost-field sweeps and route backtracking

#[cfg(test)]
mod tests {

    use crate::grid_from_rows;
    use gridcrawl::DungeonError;
    use gridcrawl::algorithm::layout::{LayoutConfig, generate_layout};
    use gridcrawl::algorithm::solver::{
        UNREACHED, backtrack, compute_cost_field, shortest_path, solve_markers,
    };
    use gridcrawl::analysis::connectivity::bfs_distance;
    use gridcrawl::io::error::UnreachableCause;
    use gridcrawl::spatial::sampling::sample_free_cells;
    use rand::{SeedableRng, rngs::StdRng};

    const TWO_ROOMS: [&str; 8] = [
        "########",
        "#..##..#",
        "#..##..#",
        "#......#",
        "#..##..#",
        "########",
        "########",
        "########",
    ];

    fn is_step(a: [usize; 2], b: [usize; 2]) -> bool {
        a[0].abs_diff(b[0]) + a[1].abs_diff(b[1]) == 1
    }

    // Tests the exact route between two rooms joined by a corridor
    #[test]
    fn test_two_room_route() {
        let grid = grid_from_rows(&TWO_ROOMS);

        let route = shortest_path(&grid, [1, 1], [1, 6]).unwrap();

        assert_eq!(
            route,
            vec![
                [1, 1],
                [1, 2],
                [2, 2],
                [3, 2],
                [3, 3],
                [3, 4],
                [3, 5],
                [3, 6],
                [2, 6],
                [1, 6]
            ]
        );
    }

    // Tests a straight corridor of length L gives L + 1 cells of rising cost
    #[test]
    fn test_straight_corridor() {
        let grid = grid_from_rows(&["#######", "#.....#", "#######"]);

        let field = compute_cost_field(&grid, [1, 1], [1, 5]).unwrap();
        let route = backtrack(&field, [1, 1], [1, 5]).unwrap();

        assert_eq!(route.len(), 5);
        assert_eq!(field.rounds, 4);
        for (step, &position) in route.iter().enumerate() {
            assert_eq!(field.at(position), Some(step as u32));
        }
    }

    // Tests costs equal breadth-first distances over the reached cells
    #[test]
    fn test_cost_field_matches_bfs() {
        let grid = grid_from_rows(&[
            "..#.....",
            ".##.###.",
            "....#...",
            ".##...#.",
            "...#....",
        ]);

        let field = compute_cost_field(&grid, [0, 0], [4, 7]).unwrap();

        for ((row, col), &cost) in field.cost.indexed_iter() {
            if cost == UNREACHED {
                continue;
            }
            assert_eq!(
                bfs_distance(&grid, [0, 0], [row, col]),
                Some(cost as usize),
                "cell ({row}, {col})"
            );
        }
        assert_eq!(field.at([4, 7]), Some(11));
    }

    // Tests the route length equals the breadth-first distance on generated levels
    #[test]
    fn test_routes_are_optimal_on_generated_levels() {
        let layout = LayoutConfig {
            room_columns: 3,
            room_rows: 3,
            ..LayoutConfig::default()
        };

        for seed in 0..6 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_layout(64, 64, &layout, &mut rng).unwrap();
            let ends = sample_free_cells(&grid, 2, &mut rng).unwrap();
            let (start, goal) = (ends[0], ends[1]);

            let route = shortest_path(&grid, start, goal).unwrap();

            assert_eq!(route.first(), Some(&start));
            assert_eq!(route.last(), Some(&goal));
            assert_eq!(Some(route.len() - 1), bfs_distance(&grid, start, goal));
            assert!(route.windows(2).all(|pair| is_step(pair[0], pair[1])));
            assert!(route.iter().all(|&p| grid.is_open(p)));
        }
    }

    // Tests the same query always yields the same route
    #[test]
    fn test_route_is_deterministic() {
        let grid = grid_from_rows(&["......", "......", "......", "......"]);

        let first = shortest_path(&grid, [0, 0], [3, 5]).unwrap();
        let second = shortest_path(&grid, [0, 0], [3, 5]).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 9);
    }

    // Tests the backtrack prefers up, then down, then left, then right
    #[test]
    fn test_backtrack_tie_break() {
        let grid = grid_from_rows(&["...", "...", "..."]);

        let route = shortest_path(&grid, [0, 0], [2, 2]).unwrap();

        // From the goal the walk goes up first, so the route ends with a vertical run
        assert_eq!(route, vec![[0, 0], [0, 1], [0, 2], [1, 2], [2, 2]]);
    }

    // Tests a start equal to the goal needs no rounds
    #[test]
    fn test_start_equals_goal() {
        let grid = grid_from_rows(&["...", "..."]);

        let field = compute_cost_field(&grid, [1, 1], [1, 1]).unwrap();
        let route = shortest_path(&grid, [1, 1], [1, 1]).unwrap();

        assert_eq!(field.rounds, 0);
        assert_eq!(route, vec![[1, 1]]);
    }

    // Tests endpoints are never barriers even when they are walls
    #[test]
    fn test_wall_endpoints_are_passable() {
        let grid = grid_from_rows(&["#..#"]);

        let route = shortest_path(&grid, [0, 0], [0, 3]).unwrap();

        assert_eq!(route.len(), 4);
    }

    // Tests a walled-off goal is reported once the frontier dries up
    #[test]
    fn test_disconnected_goal() {
        let grid = grid_from_rows(&["..#.."]);

        let result = shortest_path(&grid, [0, 0], [0, 4]);

        assert!(matches!(
            result,
            Err(DungeonError::Unreachable {
                rounds: 2,
                cause: UnreachableCause::Disconnected,
                ..
            })
        ));
    }

    // Tests a winding maze converges in exactly its path length of rounds
    #[test]
    fn test_serpentine_converges_within_cell_count() {
        let rows = [
            ".......", "######.", ".......", ".######", ".......", "######.", ".......",
        ];
        let grid = grid_from_rows(&rows);
        let cell_count = rows.len() * rows[0].len();

        let field = compute_cost_field(&grid, [0, 0], [6, 0]).unwrap();

        assert_eq!(Some(field.rounds), bfs_distance(&grid, [0, 0], [6, 0]));
        assert_eq!(field.rounds, 30);
        assert!(field.rounds < cell_count);
    }

    // Tests an unreachable goal in a long maze still stops on the empty frontier
    #[test]
    fn test_long_maze_disconnect_is_not_round_limit() {
        let grid = grid_from_rows(&[
            ".......", "######.", ".......", ".######", ".......", "#######", ".......",
        ]);

        let result = shortest_path(&grid, [0, 0], [6, 0]);

        assert!(matches!(
            result,
            Err(DungeonError::Unreachable {
                cause: UnreachableCause::Disconnected,
                ..
            })
        ));
    }

    // Tests endpoints outside the grid are rejected
    #[test]
    fn test_out_of_bounds_endpoints() {
        let grid = grid_from_rows(&["...", "..."]);

        assert!(matches!(
            shortest_path(&grid, [5, 0], [0, 0]),
            Err(DungeonError::OutOfBounds { .. })
        ));
        assert!(matches!(
            shortest_path(&grid, [0, 0], [0, 3]),
            Err(DungeonError::OutOfBounds { .. })
        ));
    }

    // Tests backtracking from a goal the sweep never reached
    #[test]
    fn test_backtrack_unreached_goal() {
        let grid = grid_from_rows(&["....", "...."]);
        let field = compute_cost_field(&grid, [0, 0], [0, 1]).unwrap();

        let result = backtrack(&field, [0, 0], [1, 3]);

        assert!(matches!(result, Err(DungeonError::Unreachable { .. })));
    }

    // Tests solving between the grid's own markers
    #[test]
    fn test_solve_markers() {
        let mut grid = grid_from_rows(&TWO_ROOMS);
        assert!(matches!(
            solve_markers(&grid),
            Err(DungeonError::InvalidConfiguration { .. })
        ));

        grid.set_start([4, 1]).unwrap();
        grid.set_goal([4, 6]).unwrap();
        let route = solve_markers(&grid).unwrap();

        assert_eq!(route.first(), Some(&[4, 1]));
        assert_eq!(route.last(), Some(&[4, 6]));
        assert_eq!(route.len(), 8);
    }
}
