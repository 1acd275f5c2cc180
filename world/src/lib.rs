#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Flood It.
//!
//! The world owns the board, the flood in progress and the click counters.
//! It changes only through [`apply`]; adapters and systems observe it through
//! the read-only [`query`] module between commands.

mod grid;

pub use grid::Grid;

use flood_it_core::{
    click_budget, CellCoord, Command, Event, GameOutcome, GameStatus, GridError, Palette,
    WELCOME_BANNER,
};
use flood_it_system_flood::Flood;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use self::grid::GridPainter;

/// Side length of the board dealt when no size is configured.
pub const DEFAULT_SIZE: u32 = 14;

/// Seed used when no seed is configured.
pub const DEFAULT_SEED: u64 = 0x5eed_f100_d17c_0de5;

/// Parameters required to deal the first board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    size: u32,
    palette: Palette,
    seed: u64,
}

impl WorldConfig {
    /// Creates a new configuration from the board size, palette and RNG seed.
    #[must_use]
    pub const fn new(size: u32, palette: Palette, seed: u64) -> Self {
        Self {
            size,
            palette,
            seed,
        }
    }

    /// Side length of every dealt board.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Colors boards are dealt from.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Seed of the world's random stream.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, Palette::classic(), DEFAULT_SEED)
    }
}

/// Represents the authoritative Flood It world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    grid: Grid,
    palette: Palette,
    rng: ChaCha8Rng,
    flood: Option<Flood>,
    clicks_used: u32,
    click_budget: u32,
    status: GameStatus,
}

impl World {
    /// Deals the first board described by `config`.
    ///
    /// Returns [`GridError::InvalidSize`] when the configured size is zero and
    /// [`GridError::TooLarge`] when it exceeds the cell identifier space.
    pub fn new(config: WorldConfig) -> Result<Self, GridError> {
        let WorldConfig {
            size,
            palette,
            seed,
        } = config;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::build(size, &palette, &mut rng)?;
        Ok(Self::assemble(grid, palette, rng))
    }

    /// Starts a game on an explicit board.
    ///
    /// Later resets deal from `palette` using a stream seeded with `seed`.
    #[must_use]
    pub fn with_grid(grid: Grid, palette: Palette, seed: u64) -> Self {
        Self::assemble(grid, palette, ChaCha8Rng::seed_from_u64(seed))
    }

    fn assemble(grid: Grid, palette: Palette, rng: ChaCha8Rng) -> Self {
        let mut world = Self {
            banner: WELCOME_BANNER,
            click_budget: click_budget(grid.size()),
            grid,
            palette,
            rng,
            flood: None,
            clicks_used: 0,
            status: GameStatus::Idle,
        };
        if let Some(outcome) = world.evaluate_termination() {
            info!("board dealt already finished: {}", outcome.message());
        }
        world
    }

    fn click(&mut self, cell: CellCoord, out_events: &mut Vec<Event>) -> Result<(), GridError> {
        match self.status {
            GameStatus::Over(outcome) => {
                debug!("ignoring click on {cell}: game already over ({outcome:?})");
                return Ok(());
            }
            GameStatus::Flooding => {
                debug!("ignoring click on {cell}: flood still spreading");
                return Ok(());
            }
            GameStatus::Idle => {}
        }

        if !cell.is_within(self.grid.size()) {
            debug!("ignoring click on {cell}: outside the board");
            self.conclude(out_events);
            return Ok(());
        }

        let target = self.grid.color_at(cell)?;
        let source = self.grid.top_left_color();
        if target == source {
            debug!("ignoring click on {cell}: flood already colored {target}");
            self.conclude(out_events);
            return Ok(());
        }

        self.clicks_used = self.clicks_used.saturating_add(1);
        self.flood = Some(Flood::start(self.grid.top_left(), source, target));
        self.status = GameStatus::Flooding;
        debug!(
            "flood {source} -> {target} started from {cell} ({}/{})",
            self.clicks_used, self.click_budget
        );
        out_events.push(Event::FloodStarted {
            cell,
            source,
            target,
            clicks_used: self.clicks_used,
        });
        Ok(())
    }

    fn tick(&mut self, out_events: &mut Vec<Event>) {
        let Some(flood) = self.flood.as_mut() else {
            return;
        };

        let report = flood.advance(&mut GridPainter::new(&mut self.grid));
        let still_active = flood.is_active();
        let repainted = report
            .repainted
            .into_iter()
            .filter_map(|id| self.grid.coord_of(id))
            .collect();
        out_events.push(Event::FloodAdvanced {
            repainted,
            frontier_len: report.frontier_len,
        });

        if still_active {
            return;
        }

        self.flood = None;
        self.status = GameStatus::Idle;
        debug!("flood settled after click {}", self.clicks_used);
        out_events.push(Event::FloodSettled {
            clicks_used: self.clicks_used,
        });
        self.conclude(out_events);
    }

    fn reset(&mut self, out_events: &mut Vec<Event>) -> Result<(), GridError> {
        self.grid = Grid::build(self.grid.size(), &self.palette, &mut self.rng)?;
        self.flood = None;
        self.clicks_used = 0;
        self.status = GameStatus::Idle;
        info!("dealt a fresh {0}x{0} board", self.grid.size());
        out_events.push(Event::GridReset {
            size: self.grid.size(),
            click_budget: self.click_budget,
        });
        self.conclude(out_events);
        Ok(())
    }

    fn conclude(&mut self, out_events: &mut Vec<Event>) {
        if let Some(outcome) = self.evaluate_termination() {
            info!(
                "{} ({}/{} clicks)",
                outcome.message(),
                self.clicks_used,
                self.click_budget
            );
            out_events.push(Event::GameOver { outcome });
        }
    }

    /// Moves an idle game into its terminal state when it is won or lost.
    ///
    /// Uniformity is checked before the budget, so the click that both
    /// exhausts the budget and completes the board wins.
    fn evaluate_termination(&mut self) -> Option<GameOutcome> {
        if self.status != GameStatus::Idle {
            return None;
        }

        let outcome = if self.grid.is_uniform() {
            GameOutcome::Won
        } else if self.clicks_used >= self.click_budget {
            GameOutcome::Lost
        } else {
            return None;
        };

        self.status = GameStatus::Over(outcome);
        Some(outcome)
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Clicks while a flood spreads, after the game ended, outside the board or on
/// the flood's current color are ignored without emitting events. An error is
/// returned only when the board rejects a lookup the world had already
/// validated.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) -> Result<(), GridError> {
    match command {
        Command::Click { cell } => world.click(cell, out_events)?,
        Command::Tick => world.tick(out_events),
        Command::Reset => world.reset(out_events)?,
    }
    Ok(())
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use flood_it_core::{CellColor, CellCoord, GameOutcome, GameStatus, Palette};

    use super::{Grid, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the board.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Palette boards are dealt from.
    #[must_use]
    pub fn palette(world: &World) -> &Palette {
        &world.palette
    }

    /// Current lifecycle state of the game.
    #[must_use]
    pub fn status(world: &World) -> GameStatus {
        world.status
    }

    /// Result of the game once it is over.
    #[must_use]
    pub fn outcome(world: &World) -> Option<GameOutcome> {
        world.status.outcome()
    }

    /// End message to show once the game is over.
    #[must_use]
    pub fn end_message(world: &World) -> Option<&'static str> {
        outcome(world).map(GameOutcome::message)
    }

    /// Number of color-changing clicks consumed on the current board.
    #[must_use]
    pub fn clicks_used(world: &World) -> u32 {
        world.clicks_used
    }

    /// Number of color-changing clicks granted for the current board.
    #[must_use]
    pub fn click_budget(world: &World) -> u32 {
        world.click_budget
    }

    /// Reports whether a flood is currently spreading.
    #[must_use]
    pub fn is_flooding(world: &World) -> bool {
        world.flood.is_some()
    }

    /// Captures the flood in progress, if any.
    #[must_use]
    pub fn flood_view(world: &World) -> Option<FloodView> {
        let flood = world.flood.as_ref()?;
        Some(FloodView {
            source: flood.source(),
            target: flood.target(),
            frontier: flood
                .frontier()
                .iter()
                .filter_map(|id| world.grid.coord_of(*id))
                .collect(),
        })
    }

    /// Immutable snapshot of a flood in progress.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FloodView {
        /// Color the flood replaces.
        pub source: CellColor,
        /// Color the flood paints.
        pub target: CellColor,
        /// Cells queued for the next step, duplicates included.
        pub frontier: Vec<CellCoord>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_it_core::CellColor;

    const BLUE: CellColor = CellColor::from_rgb(0x00, 0x00, 0xff);
    const RED: CellColor = CellColor::from_rgb(0xff, 0x00, 0x00);
    const GREEN: CellColor = CellColor::from_rgb(0x00, 0xff, 0x00);
    const YELLOW: CellColor = CellColor::from_rgb(0xff, 0xff, 0x00);

    fn two_by_two_world() -> World {
        let grid = Grid::from_columns(vec![vec![BLUE, RED], vec![GREEN, YELLOW]])
            .expect("square board");
        World::with_grid(grid, Palette::classic(), 1)
    }

    #[test]
    fn new_rejects_zero_size() {
        let error = World::new(WorldConfig::new(0, Palette::classic(), 1))
            .expect_err("zero size must be rejected");
        assert_eq!(error, GridError::InvalidSize { size: 0 });
    }

    #[test]
    fn new_reports_oversized_board_as_too_large() {
        let error = World::new(WorldConfig::new(100_000, Palette::classic(), 1))
            .expect_err("oversized board must be rejected");

        assert_eq!(error, GridError::TooLarge { size: 100_000 });
        assert!(!error.to_string().contains("greater than 0"));
    }

    #[test]
    fn default_world_grants_classic_budget() {
        let world = World::new(WorldConfig::default()).expect("default config is valid");

        assert_eq!(query::grid(&world).size(), 14);
        assert_eq!(query::click_budget(&world), 24);
        assert_eq!(query::clicks_used(&world), 0);
        assert_eq!(query::welcome_banner(&world), WELCOME_BANNER);
    }

    #[test]
    fn accepted_click_seeds_frontier_with_top_left() {
        let mut world = two_by_two_world();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::Click {
                cell: CellCoord::new(1, 0),
            },
            &mut events,
        )
        .expect("click succeeds");

        assert_eq!(query::status(&world), GameStatus::Flooding);
        assert_eq!(
            query::flood_view(&world),
            Some(query::FloodView {
                source: BLUE,
                target: GREEN,
                frontier: vec![CellCoord::ORIGIN],
            })
        );
        assert_eq!(
            events,
            vec![Event::FloodStarted {
                cell: CellCoord::new(1, 0),
                source: BLUE,
                target: GREEN,
                clicks_used: 1,
            }]
        );
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut world = two_by_two_world();
        let mut events = Vec::new();

        apply(&mut world, Command::Tick, &mut events).expect("tick succeeds");

        assert!(events.is_empty());
        assert_eq!(query::status(&world), GameStatus::Idle);
        assert_eq!(query::grid(&world).color_at(CellCoord::ORIGIN), Ok(BLUE));
    }

    #[test]
    fn out_of_bounds_click_is_ignored() {
        let mut world = two_by_two_world();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::Click {
                cell: CellCoord::new(2, 0),
            },
            &mut events,
        )
        .expect("out-of-bounds clicks are not errors");

        assert!(events.is_empty());
        assert_eq!(query::clicks_used(&world), 0);
        assert_eq!(query::status(&world), GameStatus::Idle);
    }
}
