//! Console front-end: two players sharing one terminal.

use crate::controller::Controller;
use crate::store::SessionStore;
use anyhow::{Context, Result};
use crossgame_logic::{Cell, GameErrorKind, GameStateSnapshot, WinnerInfo};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Runs one game on the console.
///
/// Reads both names, creates, joins and starts a session, then asks the
/// active player for `row column` until the game ends. Rejected moves are
/// reported and asked again.
///
/// Returns the outcome, or `None` if input ran out first.
#[instrument(skip_all)]
pub fn run_console<S, R, W>(
    controller: &mut Controller<S>,
    mut input: R,
    output: &mut W,
) -> Result<Option<WinnerInfo>>
where
    S: SessionStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "New Game")?;

    writeln!(output, "Player 1 enter the name:")?;
    let Some(first) = read_line(&mut input)? else {
        return Ok(None);
    };
    let created = controller.start_session(&first)?;

    writeln!(output, "Player 2 enter the name:")?;
    let Some(second) = read_line(&mut input)? else {
        return Ok(None);
    };
    let joined = controller.join_session(&second, created.session_id())?;
    let session_id = joined.session_id().clone();
    controller.start_game(&session_id)?;
    info!(session_id = %session_id, "Console game started");

    loop {
        let state = controller
            .get_status(&session_id)?
            .context("game was started but has no state")?;
        write_board(output, &state)?;

        let active = state.active_player();
        writeln!(
            output,
            "Player - {} with sign {} please make a move (enter row column):",
            active.name(),
            active.sign()
        )?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(output, "Input closed, leaving the game")?;
            return Ok(None);
        };
        let Some((row, col)) = parse_move(&line) else {
            debug!(line = %line, "Unparsable move");
            writeln!(output, "Please enter two numbers separated by a space")?;
            continue;
        };

        match controller.make_move(&session_id, active.id(), row, col) {
            Ok(after) => {
                if let Some(winner) = after.winner().clone() {
                    write_board(output, &after)?;
                    writeln!(output, "{}", winner)?;
                    controller.close_session(&session_id);
                    return Ok(Some(winner));
                }
                writeln!(output, "Next move")?;
            }
            Err(e) => match e.kind() {
                GameErrorKind::CellOccupied { .. } | GameErrorKind::OutOfRange { .. } => {
                    warn!(error = %e.kind(), "Move rejected");
                    writeln!(output, "{}", e.kind())?;
                }
                _ => return Err(e.into()),
            },
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn write_board<W: Write>(output: &mut W, state: &GameStateSnapshot) -> Result<()> {
    let Some(board) = state.board() else {
        return Ok(());
    };
    for row in board {
        let line = row
            .iter()
            .map(Cell::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 2"), Some((1, 2)));
        assert_eq!(parse_move("  0   0 "), Some((0, 0)));
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("-1 0"), None);
    }
}
