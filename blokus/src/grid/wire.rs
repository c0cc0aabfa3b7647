use std::str::FromStr;

use crate::{Cell, Grid, MalformedBoard, PlayerId, Position, BOARD_SIZE};

const EMPTY: char = '.';

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Owned(PlayerId::One) => '1',
        Cell::Owned(PlayerId::Two) => '2',
        // The border is never serialized
        Cell::Empty | Cell::Forbidden => EMPTY,
    }
}

impl Grid {
    /// Parses the wire format of a `width` x `height` board.
    ///
    /// The format is one line per row, joined by `\n` without a trailing newline.
    /// Every row has one character per cell: `.` for empty, `1` or `2` for a
    /// cell owned by that player. The forbidden border is implicit.
    pub fn parse(text: &str, width: i8, height: i8) -> Result<Self, MalformedBoard> {
        let mut grid = Grid::new(width, height);
        let expected_rows = height as usize;
        let expected_cols = width as usize;

        let rows: Vec<&str> = text.split('\n').collect();
        if rows.len() != expected_rows {
            return Err(MalformedBoard::WrongRowCount {
                expected: expected_rows,
                found: rows.len(),
            });
        }
        for (row, line) in rows.into_iter().enumerate() {
            let found = line.chars().count();
            if found != expected_cols {
                return Err(MalformedBoard::WrongRowLength {
                    row,
                    expected: expected_cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    EMPTY => continue,
                    '1' => Cell::Owned(PlayerId::One),
                    '2' => Cell::Owned(PlayerId::Two),
                    _ => return Err(MalformedBoard::UnrecognizedSymbol { row, col, symbol }),
                };
                grid.set(Position::new(col as i8 + 1, row as i8 + 1), cell);
            }
        }
        Ok(grid)
    }

    /// The wire format, see [`Self::parse()`].
    pub fn to_wire(&self) -> String {
        let mut result = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for y in 1..=self.height() {
            if y > 1 {
                result.push('\n');
            }
            for x in 1..=self.width() {
                result.push(symbol(self.get(Position::new(x, y))));
            }
        }
        result
    }
}

/// Parses a board of the standard size.
impl FromStr for Grid {
    type Err = MalformedBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s, BOARD_SIZE, BOARD_SIZE)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::GridInput;

    quickcheck! {
        fn wire_format_round_trips(input: GridInput) -> bool {
            let text = input.grid.to_wire();
            match Grid::parse(&text, input.grid.width(), input.grid.height()) {
                Ok(grid) => grid.to_wire() == text && grid == input.grid,
                Err(_) => false,
            }
        }
    }

    #[test]
    fn parses_owned_cells() {
        let grid = Grid::parse("1..\n.2.", 3, 2).unwrap();
        assert_eq!(grid.get(Position::new(1, 1)), Cell::Owned(PlayerId::One));
        assert_eq!(grid.get(Position::new(2, 2)), Cell::Owned(PlayerId::Two));
        assert_eq!(grid.get(Position::new(3, 2)), Cell::Empty);
        assert_eq!(grid.get(Position::new(0, 1)), Cell::Forbidden);
        assert_eq!(grid.to_string(), "1..\n.2.");
    }

    #[test]
    fn standard_board_round_trips() {
        let mut rows = vec![".............."; 14];
        rows[4] = "....1.........";
        rows[9] = ".........2....";
        let text = rows.join("\n");
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_wire(), text);
    }

    #[test]
    fn rejects_malformed_boards() {
        assert_eq!(
            Grid::parse("...\n...\n", 3, 2),
            Err(MalformedBoard::WrongRowCount {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse("...\n..", 3, 2),
            Err(MalformedBoard::WrongRowLength {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse("..#\n...", 3, 2),
            Err(MalformedBoard::UnrecognizedSymbol {
                row: 0,
                col: 2,
                symbol: '#'
            })
        );
        assert!("".parse::<Grid>().is_err());
    }
}
