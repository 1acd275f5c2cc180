#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Flood It adapters.

use anyhow::Result as AnyResult;
use flood_it_core::{CellColor, CellCoord};
use glam::Vec2;
use std::time::Duration;
use thiserror::Error;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

impl From<CellColor> for Color {
    fn from(color: CellColor) -> Self {
        Self::from_rgb_u8(color.red(), color.green(), color.blue())
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Whether the primary mouse button was pressed on this frame.
    pub click: bool,
    /// Whether the reset key was pressed on this frame.
    pub reset: bool,
    /// Board cell under the cursor, if any.
    pub cursor_cell: Option<CellCoord>,
}

/// Describes where the square board sits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardPresentation {
    /// Number of cells along each side.
    pub size: u32,
    /// Side length of a single cell in screen units.
    pub cell_length: f32,
}

impl BoardPresentation {
    /// Cell side length used when nothing else is configured.
    pub const DEFAULT_CELL_LENGTH: f32 = 25.0;

    /// Creates a new board descriptor.
    ///
    /// Returns an error when `cell_length` is not a positive finite number.
    pub fn new(size: u32, cell_length: f32) -> Result<Self, RenderingError> {
        if !(cell_length.is_finite() && cell_length > 0.0) {
            return Err(RenderingError::InvalidCellLength { cell_length });
        }

        Ok(Self { size, cell_length })
    }

    /// Distance between the window edge and the board on both axes.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.cell_length / 2.0
    }

    /// Side length of the whole board in screen units.
    #[must_use]
    pub fn side_length(&self) -> f32 {
        self.size as f32 * self.cell_length
    }

    /// Top-left corner of the provided cell.
    #[must_use]
    pub fn cell_origin(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(cell.column() as f32, cell.row() as f32) * self.cell_length
            + Vec2::splat(self.offset())
    }

    /// Maps a screen position to the board cell beneath it.
    ///
    /// Positions in the margin around the board map to `None`.
    #[must_use]
    pub fn cell_at(&self, position: Vec2) -> Option<CellCoord> {
        let local = position - Vec2::splat(self.offset());
        let side = self.side_length();
        if local.x < 0.0 || local.y < 0.0 || local.x >= side || local.y >= side {
            return None;
        }

        let column = ((local.x / self.cell_length) as u32).min(self.size.saturating_sub(1));
        let row = ((local.y / self.cell_length) as u32).min(self.size.saturating_sub(1));
        Some(CellCoord::new(column, row))
    }

    /// Anchor for the click counter, centered two cells below the board.
    #[must_use]
    pub fn counter_anchor(&self) -> Vec2 {
        Vec2::new(self.side_length() / 2.0, self.side_length() + 2.0 * self.cell_length)
    }

    /// Anchor for the end message, centered under the counter.
    #[must_use]
    pub fn message_anchor(&self) -> Vec2 {
        Vec2::new(self.side_length() / 2.0, self.side_length() + 4.0 * self.cell_length)
    }

    /// Window dimensions that fit the board and the text beneath it.
    #[must_use]
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(
            self.side_length() + self.cell_length,
            self.message_anchor().y + self.cell_length,
        )
    }
}

/// Immutable snapshot of a single colored cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCell {
    /// Board position of the cell.
    pub coord: CellCoord,
    /// Fill color of the cell.
    pub color: Color,
}

/// Scene description combining the board and the text beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Board geometry.
    pub board: BoardPresentation,
    /// Every cell of the board.
    pub cells: Vec<SceneCell>,
    /// Click counter text.
    pub counter: String,
    /// Message shown once the game has ended.
    pub end_message: Option<String>,
    /// Color used for text.
    pub text_color: Color,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        board: BoardPresentation,
        cells: Vec<SceneCell>,
        counter: String,
        end_message: Option<String>,
        text_color: Color,
    ) -> Self {
        Self {
            board,
            cells,
            counter,
            end_message,
            text_color,
        }
    }
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Flood It scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta and the
    /// input captured by the adapter, and may mutate the scene before it is
    /// rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RenderingError {
    /// Cells must have a positive side length.
    #[error("cell_length must be positive (received {cell_length})")]
    InvalidCellLength {
        /// Provided length that failed validation.
        cell_length: f32,
    },
}
