//! Square board of colored cells and its self-loop neighbor table.

use flood_it_core::{CellColor, CellCoord, CellId, GridError, Neighbors, Palette};
use flood_it_system_flood::FloodSurface;
use rand::Rng;

/// Square board of colored cells.
///
/// Cells are stored densely in column-major order, so the cell at
/// `(column, row)` has identifier `column * size + row`. Every cell carries a
/// neighbor entry for each side; sides facing off the board refer back to the
/// cell itself.
///
/// The public API is read-only. Colors change only through the world, which
/// hands the flood system a crate-private painting handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    colors: Vec<CellColor>,
    neighbors: Vec<Neighbors>,
}

impl Grid {
    /// Deals a `size × size` board, drawing every cell independently from `palette`.
    ///
    /// Returns [`GridError::InvalidSize`] when `size` is zero and
    /// [`GridError::TooLarge`] when the cell count does not fit the identifier
    /// space.
    pub fn build<R>(size: u32, palette: &Palette, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let cell_count = cell_count(size)?;
        // Palettes are never empty.
        let choices = palette.colors();
        let colors = (0..cell_count)
            .map(|_| choices[rng.gen_range(0..choices.len())])
            .collect();

        Ok(Self::wire(size, colors))
    }

    /// Builds a board from explicit columns, each listing its cells top to bottom.
    pub fn from_columns(columns: Vec<Vec<CellColor>>) -> Result<Self, GridError> {
        let size = u32::try_from(columns.len()).map_err(|_| GridError::TooLarge {
            size: columns.len() as u64,
        })?;
        let _ = cell_count(size)?;

        if let Some(column) = columns.iter().find(|column| column.len() != columns.len()) {
            return Err(GridError::NotSquare {
                columns: columns.len(),
                rows: column.len(),
            });
        }

        Ok(Self::wire(size, columns.into_iter().flatten().collect()))
    }

    fn wire(size: u32, colors: Vec<CellColor>) -> Self {
        let last = size - 1;
        let id = |column: u32, row: u32| CellId::new(column * size + row);

        let mut neighbors = Vec::with_capacity(colors.len());
        for column in 0..size {
            for row in 0..size {
                let cell = id(column, row);
                neighbors.push(Neighbors {
                    up: if row == 0 { cell } else { id(column, row - 1) },
                    down: if row == last { cell } else { id(column, row + 1) },
                    left: if column == 0 { cell } else { id(column - 1, row) },
                    right: if column == last { cell } else { id(column + 1, row) },
                });
            }
        }

        Self {
            size,
            colors,
            neighbors,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.colors.len()
    }

    /// Identifier of the cell at `cell`, if it lies on the board.
    #[must_use]
    pub fn cell_id(&self, cell: CellCoord) -> Option<CellId> {
        cell.is_within(self.size)
            .then(|| CellId::new(cell.column() * self.size + cell.row()))
    }

    /// Coordinate of the cell with identifier `id`, if it belongs to the board.
    #[must_use]
    pub fn coord_of(&self, id: CellId) -> Option<CellCoord> {
        (id.index() < self.colors.len())
            .then(|| CellCoord::new(id.get() / self.size, id.get() % self.size))
    }

    /// Color of the cell at `cell`.
    ///
    /// Returns [`GridError::OutOfRange`] outside `[0, size)` on either axis.
    pub fn color_at(&self, cell: CellCoord) -> Result<CellColor, GridError> {
        self.cell_id(cell)
            .and_then(|id| self.color_of(id))
            .ok_or(GridError::OutOfRange {
                cell,
                size: self.size,
            })
    }

    /// Color of the cell with identifier `id`.
    #[must_use]
    pub fn color_of(&self, id: CellId) -> Option<CellColor> {
        self.colors.get(id.index()).copied()
    }

    /// Neighbors of the cell with identifier `id`.
    #[must_use]
    pub fn neighbors(&self, id: CellId) -> Option<Neighbors> {
        self.neighbors.get(id.index()).copied()
    }

    /// Identifier of the top-left cell every flood starts from.
    #[must_use]
    pub const fn top_left(&self) -> CellId {
        CellId::new(0)
    }

    /// Current color of the top-left cell.
    #[must_use]
    pub fn top_left_color(&self) -> CellColor {
        self.colors[0]
    }

    /// Reports whether every cell shares the top-left cell's color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let anchor = self.top_left_color();
        self.colors.iter().all(|color| *color == anchor)
    }

    /// Number of different colors currently on the board.
    #[must_use]
    pub fn distinct_colors(&self) -> usize {
        let mut seen: Vec<CellColor> = Vec::new();
        for color in &self.colors {
            if !seen.contains(color) {
                seen.push(*color);
            }
        }
        seen.len()
    }

    /// Iterates over every cell with its color in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellCoord, CellColor)> + '_ {
        let size = self.size;
        self.colors.iter().enumerate().map(move |(index, color)| {
            let index = index as u32;
            (CellCoord::new(index / size, index % size), *color)
        })
    }

    /// Iterates over the colors of `row` from left to right.
    pub fn row(&self, row: u32) -> impl Iterator<Item = CellColor> + '_ {
        let size = self.size;
        let columns = if row < size { 0..size } else { 0..0 };
        columns.filter_map(move |column| self.color_of(CellId::new(column * size + row)))
    }
}

fn cell_count(size: u32) -> Result<u32, GridError> {
    if size == 0 {
        return Err(GridError::InvalidSize { size });
    }
    size.checked_mul(size).ok_or(GridError::TooLarge {
        size: u64::from(size),
    })
}

/// Mutating handle the world lends to the flood system for a single step.
pub(crate) struct GridPainter<'grid> {
    grid: &'grid mut Grid,
}

impl<'grid> GridPainter<'grid> {
    pub(crate) fn new(grid: &'grid mut Grid) -> Self {
        Self { grid }
    }
}

impl FloodSurface for GridPainter<'_> {
    fn color(&self, cell: CellId) -> Option<CellColor> {
        self.grid.color_of(cell)
    }

    fn neighbors(&self, cell: CellId) -> Option<Neighbors> {
        self.grid.neighbors(cell)
    }

    fn paint(&mut self, cell: CellId, color: CellColor) {
        if let Some(slot) = self.grid.colors.get_mut(cell.index()) {
            *slot = color;
        }
    }
}
