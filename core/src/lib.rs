#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Flood It engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing clicks, ticks and resets, the world executes those commands via
//! its `apply` entry point, and then broadcasts [`Event`] values describing the
//! resulting flood progress. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Flood It.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the flood adopt the color of the provided cell.
    Click {
        /// Cell selected by the player, already mapped from screen space.
        cell: CellCoord,
    },
    /// Advances an in-progress flood by exactly one discrete step.
    Tick,
    /// Discards the current board and deals a freshly colored one.
    Reset,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a click was accepted and a flood began.
    FloodStarted {
        /// Cell the player clicked to pick the new color.
        cell: CellCoord,
        /// Color the flood replaces.
        source: CellColor,
        /// Color the flood paints.
        target: CellColor,
        /// Number of color-changing clicks consumed, including this one.
        clicks_used: u32,
    },
    /// Reports the cells repainted by a single flood step.
    FloodAdvanced {
        /// Cells whose color changed during the step, in visiting order.
        repainted: Vec<CellCoord>,
        /// Number of entries queued for the next step.
        frontier_len: usize,
    },
    /// Announces that the active flood ran out of cells to visit.
    FloodSettled {
        /// Number of color-changing clicks consumed so far.
        clicks_used: u32,
    },
    /// Announces that the game reached a terminal state.
    GameOver {
        /// Whether the player won or lost.
        outcome: GameOutcome,
    },
    /// Confirms that a fresh board was dealt.
    GridReset {
        /// Side length of the new board.
        size: u32,
        /// Click budget granted for the new board.
        click_budget: u32,
    },
}

/// Computes the number of color-changing clicks allowed on a board of `size`.
///
/// The budget is `floor(7 * size / 4)`, so a 14×14 board grants 24 clicks.
#[must_use]
pub const fn click_budget(size: u32) -> u32 {
    size.saturating_mul(7) / 4
}

/// Location of a single grid cell expressed as column and row coordinates.
///
/// Columns grow to the right and rows grow downward, with the origin at the
/// top-left cell that anchors every flood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Top-left cell of every board.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Reports whether the coordinate lies inside a square board of `size`.
    #[must_use]
    pub const fn is_within(&self, size: u32) -> bool {
        self.column < size && self.row < size
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Dense index of a cell within a grid's cell table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(u32);

impl CellId {
    /// Creates a new cell identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Converts the identifier into a slice index.
    #[must_use]
    pub fn index(&self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

/// The four cells adjacent to a cell.
///
/// A boundary cell refers to itself on every side that faces off the board,
/// so neighbors are never absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbors {
    /// Cell one row above, or the cell itself on the top edge.
    pub up: CellId,
    /// Cell one row below, or the cell itself on the bottom edge.
    pub down: CellId,
    /// Cell one column to the left, or the cell itself on the left edge.
    pub left: CellId,
    /// Cell one column to the right, or the cell itself on the right edge.
    pub right: CellId,
}

impl Neighbors {
    /// Returns the neighbors in flood enqueue order: up, down, left, right.
    #[must_use]
    pub const fn in_flood_order(&self) -> [CellId; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

/// Color token carried by a cell.
///
/// Colors compare by their RGB components only. They serialize as `#rrggbb`
/// strings so palettes can be written by hand in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl CellColor {
    /// Creates a new cell color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for CellColor {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::InvalidLength(value.to_owned()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_owned()))
        };

        Ok(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for CellColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CellColor> for String {
    fn from(color: CellColor) -> Self {
        color.to_string()
    }
}

/// Reasons a `#rrggbb` color string may fail to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string did not contain exactly six hexadecimal digits.
    #[error("color '{0}' must contain exactly six hex digits")]
    InvalidLength(String),
    /// The string contained a character outside `0-9a-fA-F`.
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// Non-empty, ordered set of colors a board is dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CellColor>", into = "Vec<CellColor>")]
pub struct Palette {
    colors: Vec<CellColor>,
}

impl Palette {
    /// Red, blue, pink, magenta, green and yellow.
    pub const CLASSIC: [CellColor; 6] = [
        CellColor::from_rgb(0xff, 0x00, 0x00),
        CellColor::from_rgb(0x00, 0x00, 0xff),
        CellColor::from_rgb(0xff, 0xaf, 0xaf),
        CellColor::from_rgb(0xff, 0x00, 0xff),
        CellColor::from_rgb(0x00, 0xff, 0x00),
        CellColor::from_rgb(0xff, 0xff, 0x00),
    ];

    /// Creates a palette from the provided colors.
    ///
    /// Returns [`GridError::EmptyPalette`] when `colors` is empty.
    pub fn new(colors: Vec<CellColor>) -> Result<Self, GridError> {
        if colors.is_empty() {
            return Err(GridError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Palette containing a single color, which always deals a uniform board.
    #[must_use]
    pub fn single(color: CellColor) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// The six-color palette of the classic game.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: Self::CLASSIC.to_vec(),
        }
    }

    /// The first `count` colors of the classic palette.
    ///
    /// `count` is clamped to `1..=6`.
    #[must_use]
    pub fn classic_prefix(count: usize) -> Self {
        let count = count.clamp(1, Self::CLASSIC.len());
        Self {
            colors: Self::CLASSIC[..count].to_vec(),
        }
    }

    /// Colors in palette order.
    #[must_use]
    pub fn colors(&self) -> &[CellColor] {
        &self.colors
    }

    /// Number of colors in the palette. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`, since construction rejects empty color lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color stored at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CellColor> {
        self.colors.get(index).copied()
    }

    /// Position of `color` within the palette, if present.
    #[must_use]
    pub fn index_of(&self, color: CellColor) -> Option<usize> {
        self.colors.iter().position(|candidate| *candidate == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<Vec<CellColor>> for Palette {
    type Error = GridError;

    fn try_from(colors: Vec<CellColor>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<CellColor> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every cell shares one color.
    Won,
    /// The click budget ran out while several colors remained.
    Lost,
}

impl GameOutcome {
    /// Human-readable end message shown beneath the board.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You Win!",
            Self::Lost => "You Lose!",
        }
    }
}

/// Lifecycle state of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No flood is running; the world awaits a click.
    #[default]
    Idle,
    /// A flood is spreading and advances on every tick.
    Flooding,
    /// Terminal state; only a reset leaves it.
    Over(GameOutcome),
}

impl GameStatus {
    /// Reports whether the game reached a terminal state.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over(_))
    }

    /// Outcome of the game once it is over.
    #[must_use]
    pub const fn outcome(self) -> Option<GameOutcome> {
        match self {
            Self::Over(outcome) => Some(outcome),
            Self::Idle | Self::Flooding => None,
        }
    }
}

/// Errors raised while constructing or addressing a grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// Boards must have a positive side length.
    #[error("board size must be greater than 0 (received {size})")]
    InvalidSize {
        /// Side length that failed validation.
        size: u32,
    },
    /// The board has more cells than cell identifiers can address.
    #[error("board size {size} is too large (at most {} cells per side)", u16::MAX)]
    TooLarge {
        /// Side length that failed validation.
        size: u64,
    },
    /// A lookup addressed a cell outside the board.
    #[error("cell {cell} lies outside a board of size {size}")]
    OutOfRange {
        /// Coordinate that failed validation.
        cell: CellCoord,
        /// Side length of the board.
        size: u32,
    },
    /// Explicit boards must have as many rows as columns.
    #[error("board with {columns} columns has a column of {rows} rows")]
    NotSquare {
        /// Number of columns supplied.
        columns: usize,
        /// Length of the first column that did not match.
        rows: usize,
    },
    /// Boards are dealt from at least one color.
    #[error("palette must contain at least one color")]
    EmptyPalette,
}
