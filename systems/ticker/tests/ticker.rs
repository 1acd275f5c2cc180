use std::time::Duration;

use flood_it_core::{CellColor, CellCoord, Command, Palette};
use flood_it_system_ticker::{Config, Ticker, DEFAULT_TICK_INTERVAL};
use flood_it_world::{self as world, query, Grid, World};

#[test]
fn emits_one_tick_per_elapsed_interval() {
    let mut ticker = Ticker::new(Config::new(Duration::from_millis(16)));
    let mut commands = Vec::new();

    ticker.handle(Duration::from_millis(50), &mut commands);

    assert_eq!(commands, vec![Command::Tick; 3]);
}

#[test]
fn short_frames_accumulate_into_a_tick() {
    let mut ticker = Ticker::new(Config::default());
    let mut commands = Vec::new();

    ticker.handle(Duration::from_millis(10), &mut commands);
    assert!(commands.is_empty(), "10 ms is shorter than one interval");

    ticker.handle(Duration::from_millis(10), &mut commands);
    assert_eq!(commands, vec![Command::Tick]);
    assert_eq!(Config::default().tick_interval(), DEFAULT_TICK_INTERVAL);
}

#[test]
fn zero_interval_ticks_every_frame() {
    let mut ticker = Ticker::new(Config::new(Duration::ZERO));
    let mut commands = Vec::new();

    ticker.handle(Duration::ZERO, &mut commands);
    ticker.handle(Duration::from_secs(5), &mut commands);

    assert_eq!(commands, vec![Command::Tick; 2]);
}

#[test]
fn long_frame_is_capped() {
    let config = Config::new(Duration::from_millis(1)).with_max_ticks_per_frame(4);
    let mut ticker = Ticker::new(config);
    let mut commands = Vec::new();

    ticker.handle(Duration::from_secs(1), &mut commands);

    assert_eq!(commands.len(), 4);
}

#[test]
fn ticks_drive_a_flood_to_completion() {
    let blue = CellColor::from_rgb(0, 0, 0xff);
    let green = CellColor::from_rgb(0, 0xff, 0);
    let mut columns = vec![vec![blue; 3]; 3];
    columns[2][2] = green;
    let grid = Grid::from_columns(columns).expect("square board");
    let mut world = World::with_grid(grid, Palette::classic(), 11);
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::Click {
            cell: CellCoord::new(2, 2),
        },
        &mut events,
    )
    .expect("click applies");

    let mut ticker = Ticker::new(Config::new(Duration::from_millis(16)));
    for _ in 0..20 {
        let mut commands = Vec::new();
        ticker.handle(Duration::from_millis(16), &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut events).expect("tick applies");
        }
    }

    assert!(!query::is_flooding(&world));
    assert!(query::grid(&world).is_uniform());
}
