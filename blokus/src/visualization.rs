use crate::{Cell, Grid, PlayerId, Position};

/// Draws the playable area in a box, with column and row digits as they
/// appear in move tokens.
pub fn visualize_grid(grid: &Grid) -> String {
    let digit = |v: i8| char::from_digit(v as u32, 36).map_or('?', |c| c.to_ascii_uppercase());

    let mut result = String::from("   ");
    for x in 1..=grid.width() {
        result.push(' ');
        result.push(digit(x));
    }
    result += "\n  ╭";
    for _ in 1..=grid.width() {
        result += "──";
    }
    result += "─╮\n";

    for y in 1..=grid.height() {
        result.push(' ');
        result.push(digit(y));
        result += "│";
        for x in 1..=grid.width() {
            let pos = Position::new(x, y);
            let symbol = match grid.get(pos) {
                Cell::Owned(PlayerId::One) => '●',
                Cell::Owned(PlayerId::Two) => '○',
                _ if pos == grid.start_cell(PlayerId::One) || pos == grid.start_cell(PlayerId::Two) => '+',
                _ => '·',
            };
            result.push(' ');
            result.push(symbol);
        }
        result += " │\n";
    }

    result += "  ╰";
    for _ in 1..=grid.width() {
        result += "──";
    }
    result += "─╯";
    result
}
