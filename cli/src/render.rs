use std::io::{self, Write};

use sweeper_core::{Board, CellKind, Coord, Visibility};

const HIDDEN: char = '.';
const MINE: char = '*';

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn cell_char(cell: Visibility) -> char {
    match cell {
        Visibility::Hidden => HIDDEN,
        Visibility::Revealed(CellKind::Mine) => MINE,
        Visibility::Revealed(CellKind::Clear(count)) => {
            char::from_digit(count.into(), 10).unwrap_or('?')
        }
    }
}

fn digits(value: Coord) -> usize {
    value.checked_ilog10().unwrap_or(0) as usize + 1
}

/// Writes the visible grid with row labels down the left and column labels across the top.
pub fn render_board(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let (height, width) = board.size();
    let label_width = digits(height.saturating_sub(1));
    let cell_width = digits(width.saturating_sub(1));

    write!(out, "{:label_width$}", "")?;
    for col in 0..width {
        write!(out, " {col:>cell_width$}")?;
    }
    writeln!(out)?;

    for (row, cells) in board.visibility().rows().into_iter().enumerate() {
        write!(out, "{row:>label_width$}")?;
        for &cell in cells {
            write!(out, " {:>cell_width$}", cell_char(cell))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sweeper_core::MineLayout;

    use super::*;

    fn rendered(board: &Board) -> String {
        let mut out = Vec::new();
        render_board(board, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hidden_board_is_all_dots() {
        let board = Board::from_layout(MineLayout::from_mine_coords((2, 3), &[(0, 0)]).unwrap());

        assert_eq!(rendered(&board), "  0 1 2\n0 . . .\n1 . . .\n");
    }

    #[test]
    fn revealed_counts_and_mines_are_shown() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        let mut board = Board::from_layout(layout);
        board.reveal((0, 0)).unwrap();
        board.reveal((1, 1)).unwrap();

        assert_eq!(
            rendered(&board),
            "  0 1 2\n0 0 1 .\n1 1 * .\n2 . . .\n"
        );
    }

    #[test]
    fn wide_boards_pad_columns() {
        let board = Board::from_layout(MineLayout::from_mine_coords((1, 11), &[]).unwrap());
        let text = rendered(&board);
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("   0  1  2  3  4  5  6  7  8  9 10")
        );
        assert_eq!(
            lines.next(),
            Some("0  .  .  .  .  .  .  .  .  .  .  .")
        );
    }
}
