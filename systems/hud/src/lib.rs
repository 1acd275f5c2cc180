#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure heads-up display system that derives the text shown next to the board.

use flood_it_core::GameOutcome;
use flood_it_world::{query, Grid, World};

/// Produces data required to greet the player and report progress.
#[derive(Debug, Default)]
pub struct Hud;

impl Hud {
    /// Derives the banner that should be shown when the game starts.
    #[must_use]
    pub fn welcome_banner(&self, world: &World) -> &'static str {
        query::welcome_banner(world)
    }

    /// Exposes the board for presentation purposes.
    #[must_use]
    pub fn grid<'world>(&self, world: &'world World) -> &'world Grid {
        query::grid(world)
    }

    /// Formats the click counter as `used/budget`.
    #[must_use]
    pub fn click_counter(&self, world: &World) -> String {
        format!(
            "{}/{}",
            query::clicks_used(world),
            query::click_budget(world)
        )
    }

    /// Message displayed once the game has ended.
    #[must_use]
    pub fn end_message(&self, world: &World) -> Option<&'static str> {
        query::outcome(world).map(GameOutcome::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flood_it_core::{CellColor, CellCoord, Command, Palette};
    use flood_it_world::{self as world, WorldConfig};

    #[test]
    fn counter_starts_at_zero_of_budget() {
        let world = World::new(WorldConfig::default()).expect("default config is valid");
        let hud = Hud;

        assert_eq!(hud.click_counter(&world), "0/24");
        assert_eq!(hud.welcome_banner(&world), "Welcome to Flood It.");
        assert_eq!(hud.grid(&world).size(), 14);
    }

    #[test]
    fn counter_tracks_accepted_clicks() {
        let blue = CellColor::from_rgb(0, 0, 0xff);
        let red = CellColor::from_rgb(0xff, 0, 0);
        let grid = Grid::from_columns(vec![vec![blue, red], vec![red, red]]).expect("square");
        let mut world = World::with_grid(grid, Palette::classic(), 3);
        let mut events = Vec::new();

        world::apply(
            &mut world,
            Command::Click {
                cell: CellCoord::new(1, 1),
            },
            &mut events,
        )
        .expect("click applies");

        assert_eq!(Hud.click_counter(&world), "1/3");
        assert_eq!(Hud.end_message(&world), None);
    }

    #[test]
    fn end_message_reports_win() {
        let palette = Palette::single(CellColor::from_rgb(0, 0xff, 0));
        let world = World::new(WorldConfig::new(3, palette, 0)).expect("valid config");

        assert_eq!(Hud.end_message(&world), Some("You Win!"));
    }
}
