#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure flood propagation system that spreads a color one layer per step.
//!
//! The engine never owns cells. It reads and repaints them through the
//! [`FloodSurface`] trait, which the world implements on a private handle so
//! that no other component gains mutable access to the board.
//!
//! A cell is repainted only while its color still equals the flood's source
//! color. That single equality test doubles as the visited check: revisiting a
//! repainted cell, a duplicate frontier entry, or a boundary cell's self-loop
//! neighbor finds the target color and contributes nothing.

use flood_it_core::{CellColor, CellId, Neighbors};

/// Board access required to advance a flood.
pub trait FloodSurface {
    /// Current color of the cell, or `None` for an unknown identifier.
    fn color(&self, cell: CellId) -> Option<CellColor>;

    /// Neighbors of the cell, or `None` for an unknown identifier.
    fn neighbors(&self, cell: CellId) -> Option<Neighbors>;

    /// Repaints the cell. Unknown identifiers are ignored.
    fn paint(&mut self, cell: CellId, color: CellColor);
}

/// Summary of a single flood step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Cells repainted during the step, in visiting order.
    pub repainted: Vec<CellId>,
    /// Number of entries queued for the next step.
    pub frontier_len: usize,
}

/// Advances a flood by one discrete step and returns the next frontier.
///
/// Every frontier cell still colored `source` is repainted to `target` and
/// queues its neighbors as up, down, left, right. All other entries are
/// skipped. When `source == target` nothing is ever repainted.
pub fn step<S>(surface: &mut S, frontier: &[CellId], source: CellColor, target: CellColor) -> Vec<CellId>
where
    S: FloodSurface + ?Sized,
{
    let mut next = Vec::with_capacity(frontier.len().saturating_mul(4));
    spread(surface, frontier, source, target, &mut next, |_| {});
    next
}

fn spread<S, F>(
    surface: &mut S,
    frontier: &[CellId],
    source: CellColor,
    target: CellColor,
    next: &mut Vec<CellId>,
    mut on_paint: F,
) where
    S: FloodSurface + ?Sized,
    F: FnMut(CellId),
{
    if source == target {
        return;
    }

    for &cell in frontier {
        if surface.color(cell) != Some(source) {
            continue;
        }
        let Some(neighbors) = surface.neighbors(cell) else {
            continue;
        };

        surface.paint(cell, target);
        on_paint(cell);
        next.extend(neighbors.in_flood_order());
    }
}

/// Flood in progress: the frontier plus the colors being swapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flood {
    frontier: Vec<CellId>,
    source: CellColor,
    target: CellColor,
}

impl Flood {
    /// Seeds a flood at `origin` that replaces `source` with `target`.
    #[must_use]
    pub fn start(origin: CellId, source: CellColor, target: CellColor) -> Self {
        Self {
            frontier: vec![origin],
            source,
            target,
        }
    }

    /// Color being replaced.
    #[must_use]
    pub const fn source(&self) -> CellColor {
        self.source
    }

    /// Color being painted.
    #[must_use]
    pub const fn target(&self) -> CellColor {
        self.target
    }

    /// Cells awaiting evaluation on the next step, duplicates included.
    #[must_use]
    pub fn frontier(&self) -> &[CellId] {
        &self.frontier
    }

    /// A flood is active exactly while its frontier is non-empty.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.frontier.is_empty()
    }

    /// Runs one step against `surface`, replacing the frontier.
    pub fn advance<S>(&mut self, surface: &mut S) -> StepReport
    where
        S: FloodSurface + ?Sized,
    {
        let mut repainted = Vec::new();
        let mut next = Vec::with_capacity(self.frontier.len().saturating_mul(4));
        spread(
            surface,
            &self.frontier,
            self.source,
            self.target,
            &mut next,
            |cell| repainted.push(cell),
        );
        self.frontier = next;

        StepReport {
            repainted,
            frontier_len: self.frontier.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: CellColor = CellColor::from_rgb(0xff, 0, 0);
    const BLUE: CellColor = CellColor::from_rgb(0, 0, 0xff);

    /// Two cells side by side; each cell's off-board sides loop to itself.
    struct Pair {
        colors: [CellColor; 2],
    }

    impl FloodSurface for Pair {
        fn color(&self, cell: CellId) -> Option<CellColor> {
            self.colors.get(cell.index()).copied()
        }

        fn neighbors(&self, cell: CellId) -> Option<Neighbors> {
            let other = CellId::new(1 - cell.get().min(1));
            (cell.index() < 2).then_some(Neighbors {
                up: cell,
                down: cell,
                left: if cell.get() == 0 { cell } else { other },
                right: if cell.get() == 0 { other } else { cell },
            })
        }

        fn paint(&mut self, cell: CellId, color: CellColor) {
            if let Some(slot) = self.colors.get_mut(cell.index()) {
                *slot = color;
            }
        }
    }

    #[test]
    fn matching_source_and_target_paints_nothing() {
        let mut surface = Pair { colors: [RED, RED] };
        let next = step(&mut surface, &[CellId::new(0)], RED, RED);

        assert!(next.is_empty());
        assert_eq!(surface.colors, [RED, RED]);
    }

    #[test]
    fn duplicate_entries_repaint_once() {
        let mut surface = Pair { colors: [RED, BLUE] };
        let mut flood = Flood::start(CellId::new(0), RED, BLUE);
        flood.frontier.push(CellId::new(0));

        let report = flood.advance(&mut surface);

        assert_eq!(report.repainted, vec![CellId::new(0)]);
        assert_eq!(report.frontier_len, 4);
    }

    #[test]
    fn unknown_cells_contribute_nothing() {
        let mut surface = Pair { colors: [RED, RED] };
        let next = step(&mut surface, &[CellId::new(7)], RED, BLUE);

        assert!(next.is_empty());
        assert_eq!(surface.colors, [RED, RED]);
    }
}
