use crate::grid::Grid;

/// Computes the next generation of the grid.
///
/// The input grid is left untouched and every cell of the result is computed
/// from the input only, so no cell ever observes a partially updated board.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.columns());

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let neighbors = neighbor_count(grid, row, col);
            next.set(row, col, grid.get(row, col).next(neighbors));
        }
    }

    next
}

/// Counts the live cells among the 8 cells surrounding the given coordinate.
///
/// Neighbors that fall outside of `1..=rows - 1` or `1..=columns - 1` count as dead.
/// This means the first row and the first column are always read as dead when
/// looked up as a neighbor, while the last row and column are read normally.
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    let mut count = 0;

    for i in -1..=1 {
        for j in -1..=1 {
            // Skip the cell itself
            if i == 0 && j == 0 {
                continue;
            }

            count += clamped_value(grid, row + i, col + j);
        }
    }

    count
}

fn clamped_value(grid: &Grid, row: isize, col: isize) -> u8 {
    let last_row = grid.rows() as isize - 1;
    let last_col = grid.columns() as isize - 1;

    if row < 1 || row > last_row || col < 1 || col > last_col {
        return 0;
    }

    grid.get(row as usize, col as usize).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                if grid.get(row, col) == Cell::Alive {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn when_stepping_random_grids_the_dimensions_are_preserved() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let rows = rng.gen_range(1..12);
            let columns = rng.gen_range(1..12);
            let grid = Grid::random(rows, columns, &mut rng);

            let next = step(&grid);

            assert_eq!(next.rows(), rows);
            assert_eq!(next.columns(), columns);
        }
    }

    #[test]
    fn when_stepping_a_single_cell_grid_the_cell_dies() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, Cell::Alive);

        assert_eq!(step(&grid), Grid::new(1, 1));
    }

    #[test]
    fn when_stepping_an_empty_grid_it_stays_empty() {
        let grid = Grid::new(6, 9);

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn when_a_live_cell_has_no_neighbors_it_dies_of_underpopulation() {
        let board = "\
            rows 3
            cols 3
            m ...
            m .*.
            m ...";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 1, 1), 0);
        assert_eq!(step(&grid).get(1, 1), Cell::Dead);
    }

    #[test]
    fn when_a_live_cell_has_one_neighbor_it_dies() {
        let board = "\
            rows 4
            cols 4
            m ....
            m .**.
            m ....
            m ....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 1, 1), 1);
        assert_eq!(step(&grid).get(1, 1), Cell::Dead);
    }

    #[test]
    fn when_a_live_cell_has_two_or_three_neighbors_it_survives() {
        let board = "\
            rows 5
            cols 5
            m .....
            m .**..
            m .**..
            m .....
            m .....";
        let grid = Grid::parse(board).unwrap();

        // Each cell of the block sees the other three
        assert_eq!(neighbor_count(&grid, 1, 1), 3);
        assert_eq!(step(&grid), grid);

        let board = "\
            rows 4
            cols 4
            m ....
            m .*..
            m ..*.
            m ...*";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 2), 2);
        assert_eq!(step(&grid).get(2, 2), Cell::Alive);
    }

    #[test]
    fn when_a_live_cell_has_four_or_more_neighbors_it_dies_of_overpopulation() {
        let board = "\
            rows 5
            cols 5
            m .....
            m .*.*.
            m ..*..
            m .*.*.
            m .....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 2), 4);
        assert_eq!(step(&grid).get(2, 2), Cell::Dead);

        let board = "\
            rows 5
            cols 5
            m .....
            m .***.
            m .***.
            m .***.
            m .....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 2), 8);
        assert_eq!(step(&grid).get(2, 2), Cell::Dead);
    }

    #[test]
    fn when_a_dead_cell_has_exactly_three_neighbors_it_is_born() {
        let board = "\
            rows 4
            cols 4
            m ....
            m .**.
            m .*..
            m ....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 2), 3);
        assert_eq!(step(&grid).get(2, 2), Cell::Alive);
    }

    #[test]
    fn when_a_dead_cell_has_two_or_four_neighbors_it_stays_dead() {
        let board = "\
            rows 4
            cols 4
            m ....
            m .**.
            m ....
            m ....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 2), 2);
        assert_eq!(step(&grid).get(2, 2), Cell::Dead);

        let board = "\
            rows 5
            cols 5
            m .....
            m .*.*.
            m .....
            m .*.*.
            m .....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 2), 4);
        assert_eq!(step(&grid).get(2, 2), Cell::Dead);
    }

    #[test]
    fn when_stepping_a_blinker_away_from_the_first_row_and_column_it_oscillates() {
        let board = "\
            rows 5
            cols 5
            m .....
            m .....
            m .***.
            m .....
            m .....";
        let grid = Grid::parse(board).unwrap();

        let next = step(&grid);
        assert_eq!(alive_cells(&next), vec![(1, 2), (2, 2), (3, 2)]);

        let back = step(&next);
        assert_eq!(alive_cells(&back), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn when_stepping_a_blinker_on_the_first_row_its_cells_are_not_seen_as_neighbors() {
        let board = "\
            rows 5
            cols 5
            m .***.
            m .....
            m .....
            m .....
            m .....";
        let grid = Grid::parse(board).unwrap();

        // Lookups into row 0 always read as dead, so nothing survives or is born
        assert_eq!(neighbor_count(&grid, 0, 2), 0);
        assert_eq!(neighbor_count(&grid, 1, 2), 0);
        assert_eq!(step(&grid), Grid::new(5, 5));
    }

    #[test]
    fn when_stepping_a_blinker_on_the_first_column_its_cells_are_not_seen_as_neighbors() {
        let board = "\
            rows 5
            cols 5
            m .....
            m *....
            m *....
            m *....
            m .....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 2, 0), 0);
        assert_eq!(neighbor_count(&grid, 2, 1), 0);
        assert_eq!(step(&grid), Grid::new(5, 5));
    }

    #[test]
    fn when_stepping_a_blinker_next_to_the_first_row_it_dies_instead_of_oscillating() {
        let board = "\
            rows 5
            cols 5
            m .....
            m .***.
            m .....
            m .....
            m .....";
        let grid = Grid::parse(board).unwrap();

        // Row 0 still reads row 1, so the first step looks like a regular blinker
        let next = step(&grid);
        assert_eq!(neighbor_count(&grid, 0, 2), 3);
        assert_eq!(neighbor_count(&grid, 2, 2), 3);
        assert_eq!(alive_cells(&next), vec![(0, 2), (1, 2), (2, 2)]);

        // (0, 2) is invisible to its neighbors, so nothing is born and the column dies out
        assert_eq!(neighbor_count(&next, 1, 1), 2);
        assert_eq!(neighbor_count(&next, 1, 2), 1);
        assert_eq!(neighbor_count(&next, 1, 3), 2);
        assert_eq!(step(&next), Grid::new(5, 5));
    }

    #[test]
    fn when_stepping_a_blinker_on_the_last_row_the_last_row_is_read_normally() {
        let board = "\
            rows 5
            cols 5
            m .....
            m .....
            m .....
            m .....
            m .***.";
        let grid = Grid::parse(board).unwrap();

        let next = step(&grid);

        assert_eq!(neighbor_count(&grid, 3, 2), 3);
        assert_eq!(alive_cells(&next), vec![(3, 2), (4, 2)]);
    }

    #[test]
    fn when_stepping_a_block_in_the_top_left_corner_it_disappears() {
        let board = "\
            rows 4
            cols 4
            m **..
            m **..
            m ....
            m ....";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(neighbor_count(&grid, 1, 1), 0);
        assert_eq!(step(&grid), Grid::new(4, 4));
    }

    #[test]
    fn when_stepping_a_block_in_the_bottom_right_corner_it_is_a_still_life() {
        let board = "\
            rows 4
            cols 4
            m ....
            m ....
            m ..**
            m ..**";
        let grid = Grid::parse(board).unwrap();

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn when_stepping_the_same_grid_twice_the_results_match_and_the_input_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::random(16, 24, &mut rng);
        let snapshot = grid.clone();

        let first = step(&grid);
        let second = step(&grid);

        assert_eq!(first, second);
        assert_eq!(grid, snapshot);
    }
}
