//! Tests for text rendering of levels, routes and windows

#[cfg(test)]
mod tests {

    use crate::grid_from_rows;
    use gridcrawl::algorithm::solver::shortest_path;
    use gridcrawl::io::render::{ROUTE_SYMBOL, render_cells, render_level};
    use gridcrawl::spatial::window::extract_window;

    // Tests a level without a route matches the plain text form
    #[test]
    fn test_render_without_route() {
        let grid = grid_from_rows(&["#..", "..#"]);

        assert_eq!(render_level(&grid, &[]), grid.to_string());
        assert_eq!(render_level(&grid, &[]), "W  \n  W\n");
    }

    // Tests the route is drawn between the markers without hiding them
    #[test]
    fn test_render_route_keeps_markers() {
        let mut grid = grid_from_rows(&["#####", "#...#", "#####"]);
        grid.set_start([1, 1]).unwrap();
        grid.set_goal([1, 3]).unwrap();
        let route = shortest_path(&grid, [1, 1], [1, 3]).unwrap();

        let text = render_level(&grid, &route);

        assert_eq!(text, format!("WWWWW\nWS{ROUTE_SYMBOL}GW\nWWWWW\n"));
    }

    // Tests route cells on walls are never drawn
    #[test]
    fn test_route_over_wall_is_ignored() {
        let grid = grid_from_rows(&["#."]);

        assert_eq!(render_level(&grid, &[[0, 0], [0, 1]]), format!("W{ROUTE_SYMBOL}\n"));
    }

    // Tests a window is drawn with route cells translated from grid coordinates
    #[test]
    fn test_render_window_offsets_route() {
        let grid = grid_from_rows(&["......", "......", "......", "......"]);
        let route = vec![[2, 3], [2, 4], [2, 5]];

        let (window, margins) = extract_window(&grid, [2, 4], 2).unwrap();
        let origin = [2 - margins.up, 4 - margins.left];
        let text = render_cells(window, origin, &route);

        assert_eq!(origin, [1, 3]);
        assert_eq!(text, "  \n..\n");
    }
}
