use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use flood_it_core::{CellCoord, Command, Event};
use flood_it_system_hud::Hud;
use flood_it_world::{self as world, query, World};
use log::debug;

/// A single line of terminal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TerminalCommand {
    Click(CellCoord),
    Reset,
    Quit,
}

/// Parses `x y`, `r` or `q`. Returns `None` for anything else.
pub(crate) fn parse_line(line: &str) -> Option<TerminalCommand> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    match (first, words.next(), words.next()) {
        ("r" | "R", None, _) => Some(TerminalCommand::Reset),
        ("q" | "Q", None, _) => Some(TerminalCommand::Quit),
        (column, Some(row), None) => {
            let column = column.parse().ok()?;
            let row = row.parse().ok()?;
            Some(TerminalCommand::Click(CellCoord::new(column, row)))
        }
        _ => None,
    }
}

/// Plays the game over line-oriented input until `q` or end of input.
pub(crate) fn run<R, W>(mut world: World, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let hud = Hud;
    writeln!(output, "{}", hud.welcome_banner(&world))?;
    write_legend(&world, &mut output)?;
    write_board(&world, &hud, &mut output)?;

    let mut events = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read terminal input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_line(&line) {
            Some(TerminalCommand::Quit) => break,
            Some(TerminalCommand::Reset) => Command::Reset,
            Some(TerminalCommand::Click(cell)) => Command::Click { cell },
            None => {
                writeln!(output, "expected `x y`, `r` or `q`")?;
                continue;
            }
        };

        events.clear();
        world::apply(&mut world, command, &mut events)?;
        settle(&mut world, &mut events)?;
        debug!("terminal command produced {} events", events.len());
        write_board(&world, &hud, &mut output)?;
    }

    output.flush()?;
    Ok(())
}

fn settle(world: &mut World, events: &mut Vec<Event>) -> Result<()> {
    let limit = query::grid(world).cell_count() + 1;
    for _ in 0..limit {
        if !query::is_flooding(world) {
            break;
        }
        world::apply(world, Command::Tick, events)?;
    }
    Ok(())
}

fn write_legend<W: Write>(world: &World, output: &mut W) -> Result<()> {
    let legend: Vec<String> = query::palette(world)
        .colors()
        .iter()
        .enumerate()
        .map(|(index, color)| format!("{}={color}", letter(Some(index))))
        .collect();
    writeln!(output, "{}", legend.join(" "))?;
    Ok(())
}

fn write_board<W: Write>(world: &World, hud: &Hud, output: &mut W) -> Result<()> {
    let grid = hud.grid(world);
    let palette = query::palette(world);
    for row in 0..grid.size() {
        let line: String = grid
            .row(row)
            .map(|color| letter(palette.index_of(color)))
            .collect();
        writeln!(output, "{line}")?;
    }
    writeln!(output, "{}", hud.click_counter(world))?;
    if let Some(message) = hud.end_message(world) {
        writeln!(output, "{message}")?;
    }
    Ok(())
}

fn letter(index: Option<usize>) -> char {
    index
        .and_then(|index| u8::try_from(index).ok())
        .filter(|index| *index < 26)
        .map_or('?', |index| char::from(b'A' + index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_it_core::Palette;
    use flood_it_world::Grid;

    #[test]
    fn parses_clicks_resets_and_quits() {
        assert_eq!(
            parse_line("3 4"),
            Some(TerminalCommand::Click(CellCoord::new(3, 4)))
        );
        assert_eq!(parse_line("  r "), Some(TerminalCommand::Reset));
        assert_eq!(parse_line("Q"), Some(TerminalCommand::Quit));
        assert_eq!(parse_line("-1 2"), None);
        assert_eq!(parse_line("1 2 3"), None);
        assert_eq!(parse_line("x"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn plays_a_scripted_game_to_a_win() {
        let palette = Palette::classic_prefix(2);
        let red = palette.colors()[0];
        let blue = palette.colors()[1];
        let grid = Grid::from_columns(vec![vec![red, blue], vec![blue, blue]]).expect("square");
        let world = World::with_grid(grid, palette, 1);
        let mut output = Vec::new();

        run(world, "nonsense\n1 1\n".as_bytes(), &mut output).expect("terminal run");

        let text = String::from_utf8(output).expect("utf8 output");
        assert_eq!(
            text,
            "Welcome to Flood It.\n\
             A=#ff0000 B=#0000ff\n\
             AB\n\
             BB\n\
             0/3\n\
             expected `x y`, `r` or `q`\n\
             BB\n\
             BB\n\
             1/3\n\
             You Win!\n"
        );
    }

    #[test]
    fn unknown_colors_render_as_question_marks() {
        assert_eq!(letter(None), '?');
        assert_eq!(letter(Some(2)), 'C');
        assert_eq!(letter(Some(40)), '?');
    }
}
