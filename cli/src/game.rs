use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sweeper_core::{Board, Coord2, GameStatus};

use crate::input::parse_coords;
use crate::render::{CLEAR_SCREEN, render_board};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    /// Input ran out before the game finished.
    Abandoned,
}

#[derive(Copy, Clone, Debug)]
pub struct PlayOptions {
    pub clear_screen: bool,
}

/// Runs turns until the board is won or lost, or the input is exhausted.
pub fn play(
    board: &mut Board,
    mut input: impl BufRead,
    mut output: impl Write,
    options: PlayOptions,
) -> Result<Ending> {
    loop {
        if options.clear_screen {
            write!(output, "{CLEAR_SCREEN}")?;
        }
        render_board(board, &mut output)?;

        match board.status() {
            GameStatus::Won => {
                writeln!(output, "You won, every safe cell is open!")?;
                return Ok(Ending::Won);
            }
            GameStatus::Lost => {
                writeln!(output, "Boom, that was a mine. Try again.")?;
                return Ok(Ending::Lost);
            }
            GameStatus::InProgress => {}
        }

        let Some(coords) = prompt_coords(board, &mut input, &mut output)? else {
            log::info!("input closed before the game finished");
            return Ok(Ending::Abandoned);
        };
        let outcome = board.reveal(coords).context("revealing a checked cell")?;
        log::debug!("reveal {:?}: {:?}", coords, outcome);
    }
}

/// Asks until the player types an in-bounds `row col`. `None` once input is exhausted.
fn prompt_coords(
    board: &Board,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Coord2>> {
    let (height, width) = board.size();
    let mut line = String::new();
    loop {
        writeln!(
            output,
            "Enter the row and column of the cell to reveal, e.g. \"0 3\" (rows 0-{}, columns 0-{})",
            height - 1,
            width - 1
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("reading player input")? == 0 {
            return Ok(None);
        }

        let checked = parse_coords(&line)
            .map_err(anyhow::Error::from)
            .and_then(|coords| Ok(board.layout().validate_coords(coords)?));
        match checked {
            Ok(coords) => return Ok(Some(coords)),
            Err(err) => {
                log::trace!("rejected input {:?}", line.trim_end());
                writeln!(output, "{err}")?;
            }
        }
    }
}
