#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure input system translating adapter frame input into world commands.

use flood_it_core::{CellCoord, Command};

/// Input snapshot distilled from adapter-provided frame input data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// Indicates whether the primary button was pressed on this frame.
    pub click: bool,
    /// Indicates whether the player requested a new board on this frame.
    pub reset: bool,
    /// Cell under the cursor, or `None` when the cursor is off the board.
    pub cursor_cell: Option<CellCoord>,
}

impl PlayerInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(click: bool, reset: bool, cursor_cell: Option<CellCoord>) -> Self {
        Self {
            click,
            reset,
            cursor_cell,
        }
    }
}

/// Input system that emits click and reset commands.
#[derive(Debug, Default, Clone)]
pub struct Input;

impl Input {
    /// Creates a new input system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Translates one frame of input into commands.
    ///
    /// A reset is emitted before the click so a click on the same frame lands
    /// on the freshly dealt board. Clicks off the board produce nothing.
    pub fn handle(&self, input: PlayerInput, out: &mut Vec<Command>) {
        if input.reset {
            out.push(Command::Reset);
        }

        if input.click {
            if let Some(cell) = input.cursor_cell {
                out.push(Command::Click { cell });
            }
        }
    }
}
