use crate::cells::Cell;
use crate::config::Config;
use crate::grid::Grid;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// How cells are written to the terminal.
#[derive(Clone, Debug, PartialEq)]
pub struct Symbols {
    pub alive: String,
    pub dead: String,
    pub separator: String,
}

impl Symbols {
    fn of(&self, cell: Cell) -> &str {
        match cell {
            Cell::Alive => &self.alive,
            Cell::Dead => &self.dead,
        }
    }
}

impl From<&Config> for Symbols {
    fn from(config: &Config) -> Symbols {
        Symbols {
            alive: config.alive.clone(),
            dead: config.dead.clone(),
            separator: config.separator.clone(),
        }
    }
}

/// Renders the grid as text, every cell followed by the separator and one line per row.
pub fn frame(grid: &Grid, symbols: &Symbols) -> String {
    let mut frame = String::new();

    for row in grid.iter_rows() {
        for cell in row {
            frame.push_str(symbols.of(*cell));
            frame.push_str(&symbols.separator);
        }
        frame.push('\n');
    }

    frame
}

/// Renders the grid as its raw `0`/`1` values.
pub fn digits(grid: &Grid, separator: &str) -> String {
    let symbols = Symbols {
        alive: "1".to_string(),
        dead: "0".to_string(),
        separator: separator.to_string(),
    };
    frame(grid, &symbols)
}

/// Clears the whole terminal.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    out.flush()
}

/// Draws a generation over the previous one, starting from the top-left corner.
pub fn draw<W: Write>(
    out: &mut W,
    iteration: usize,
    grid: &Grid,
    symbols: &Symbols,
) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, 0),
        Print(format!("Iteration: {}\n", iteration)),
        Print(frame(grid, symbols))
    )?;
    out.flush()
}
