//! Column-aligned text grids with multi-line cells.
//!
//! Rows are collections of string cells; cells may contain embedded
//! newlines. [`Grid::layout`] pads every column to the width of its
//! widest cell line and emits rows as blocks, one physical line per
//! cell line.

use thiserror::Error;

/// Spaces between adjacent columns.
const GUTTER: &str = "   ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A row's cell count differs from the first row's.
    #[error("Row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// A rectangular table of text cells.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Render the grid, padding columns and stacking multi-line cells.
    pub fn layout(&self) -> Result<String, GridError> {
        let Some(first) = self.rows.first() else {
            return Ok(String::new());
        };
        let columns = first.len();
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: index + 1,
                    expected: columns,
                    got: row.len(),
                });
            }
        }

        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (cell, width) in row.iter().zip(widths.iter_mut()) {
                for line in cell.lines() {
                    *width = (*width).max(line.chars().count());
                }
            }
        }

        let mut out = String::new();
        for row in &self.rows {
            let height = row
                .iter()
                .map(|cell| cell.lines().count())
                .max()
                .unwrap_or(0)
                .max(1);
            for line_index in 0..height {
                let mut line = String::new();
                for (column, cell) in row.iter().enumerate() {
                    if column > 0 {
                        line.push_str(GUTTER);
                    }
                    let text = cell.lines().nth(line_index).unwrap_or("");
                    write_padded(&mut line, text, widths[column]);
                }
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }
        Ok(out)
    }
}

fn write_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_renders_nothing() {
        assert_eq!(Grid::new().layout().unwrap(), "");
    }

    #[test]
    fn test_columns_align_on_widest_cell() {
        let mut grid = Grid::new();
        grid.push_row(["PACKAGE", "NOTE"]);
        grid.push_row(["lxml", "Import of HTML"]);
        grid.push_row(["scikit-image", "Image"]);
        assert_eq!(
            grid.layout().unwrap(),
            "PACKAGE        NOTE\n\
             lxml           Import of HTML\n\
             scikit-image   Image\n"
        );
    }

    #[test]
    fn test_multi_line_cells_stack() {
        let mut grid = Grid::new();
        grid.push_row(["pyocr", "tesseract\ncuneiform"]);
        grid.push_row(["lxml", "html"]);
        assert_eq!(
            grid.layout().unwrap(),
            "pyocr   tesseract\n\
             \u{20}       cuneiform\n\
             lxml    html\n"
        );
    }

    #[test]
    fn test_trailing_padding_is_trimmed() {
        let mut grid = Grid::new();
        grid.push_row(["a", "b"]);
        grid.push_row(["long-name", "c"]);
        let text = grid.layout().unwrap();
        for line in text.lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let mut grid = Grid::new();
        grid.push_row(["a", "b"]);
        grid.push_row(["only-one"]);
        assert_eq!(
            grid.layout(),
            Err(GridError::RaggedRow {
                row: 2,
                expected: 2,
                got: 1,
            })
        );
    }

    #[test]
    fn test_widths_count_chars_not_bytes() {
        let mut grid = Grid::new();
        grid.push_row(["Ä", "x"]);
        grid.push_row(["ab", "y"]);
        assert_eq!(grid.layout().unwrap(), "Ä    x\nab   y\n");
    }
}
