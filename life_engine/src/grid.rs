use crate::cells::Cell;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur when parsing a board from its textual representation.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("board is missing the `rows` and `cols` header")]
    MissingDimensions,
    #[error("board dimensions must be greater than zero, got {rows}x{columns}")]
    EmptyDimensions { rows: usize, columns: usize },
    #[error("a {rows}x{columns} board is too large")]
    TooLarge { rows: usize, columns: usize },
    #[error("invalid dimension `{0}`")]
    InvalidDimension(String),
    #[error("expected {expected} rows but found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells but expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell `{value}` at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: char },
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// A single generation of the board.
///
/// The dimensions are fixed on creation and cells are stored row by row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Grid {
        Grid {
            rows,
            columns,
            cells: vec![Cell::Dead; cell_count(rows, columns)],
        }
    }

    /// Creates a grid where every cell is independently alive or dead with equal probability.
    ///
    /// # Arguments
    /// * `rows` - The number of rows.
    /// * `columns` - The number of columns.
    /// * `rng` - The random source, seeded by the caller.
    ///
    /// Panics if either dimension is zero.
    pub fn random<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Grid {
        let cells = (0..cell_count(rows, columns)).map(|_| rng.gen()).collect();

        Grid {
            rows,
            columns,
            cells,
        }
    }

    /// Parses a board from its textual representation.
    ///
    /// The header declares the dimensions and each `m` line holds one row,
    /// where `.` is a dead cell and `*` a live one:
    ///
    /// ```text
    /// rows 3
    /// cols 3
    /// m .*.
    /// m .*.
    /// m .*.
    /// ```
    pub fn parse(contents: &str) -> Result<Grid, ParseError> {
        let metadata = Regex::new(r"rows (\d+)\s+cols (\d+)")?
            .captures(contents)
            .ok_or(ParseError::MissingDimensions)?;

        let rows = parse_dimension(&metadata[1])?;
        let columns = parse_dimension(&metadata[2])?;

        if rows == 0 || columns == 0 {
            return Err(ParseError::EmptyDimensions { rows, columns });
        }

        if rows.checked_mul(columns).is_none() {
            return Err(ParseError::TooLarge { rows, columns });
        }

        let lines: Vec<&str> = Regex::new(r"m (.*)")?
            .captures_iter(contents)
            .filter_map(|captures| captures.get(1))
            .map(|line| line.as_str().trim())
            .collect();

        if lines.len() != rows {
            return Err(ParseError::RowCount {
                expected: rows,
                found: lines.len(),
            });
        }

        let mut grid = Grid::new(rows, columns);
        for (row, line) in lines.into_iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(ParseError::RowLength {
                    row,
                    expected: columns,
                    found,
                });
            }

            for (col, value) in line.chars().enumerate() {
                let cell =
                    Cell::from_char(value).ok_or(ParseError::InvalidCell { row, col, value })?;
                grid.set(row, col, cell);
            }
        }

        Ok(grid)
    }

    /// Returns the cell at the given coordinate.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of live cells.
    pub fn alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "Coordinate ({}, {}) is outside of a {}x{} grid",
            row,
            col,
            self.rows,
            self.columns
        );
        row * self.columns + col
    }
}

fn cell_count(rows: usize, columns: usize) -> usize {
    assert!(
        rows > 0 && columns > 0,
        "Grid dimensions must be greater than zero, got {}x{}",
        rows,
        columns
    );
    rows.checked_mul(columns).unwrap_or_else(|| {
        panic!("A {}x{} grid is too large", rows, columns);
    })
}

fn parse_dimension(value: &str) -> Result<usize, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidDimension(value.to_string()))
}
