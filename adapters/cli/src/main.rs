#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Flood It experience.

mod config;
mod terminal;

use std::{io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use flood_it_rendering::{
    BoardPresentation, Color, FrameInput, Presentation, RenderingBackend, Scene, SceneCell,
};
use flood_it_rendering_macroquad::MacroquadBackend;
use flood_it_system_hud::Hud;
use flood_it_system_input::{Input, PlayerInput};
use flood_it_system_ticker::{Config as TickerConfig, Ticker};
use flood_it_world::{self as world, World};
use log::{info, warn};

use self::config::{FileConfig, Overrides, Settings};

const BACKGROUND: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
const TEXT: Color = Color::from_rgb_u8(0x00, 0x00, 0x00);

/// Command-line arguments for the Flood It experience.
#[derive(Debug, Parser)]
#[command(name = "flood-it", about = "Flood the board with a single color.")]
struct Args {
    /// Number of cells along each side of the board.
    #[arg(long)]
    size: Option<u32>,
    /// Seed for dealing boards; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of classic palette colors to deal from.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    colors: Option<u8>,
    /// Milliseconds between flood steps.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,
    /// Optional TOML file with size, seed, tick_ms and palette.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Play in the terminal instead of opening a window.
    #[arg(long)]
    headless: bool,
    /// Synchronise presentation with the display refresh rate.
    #[arg(long)]
    vsync: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            seed: self.seed,
            colors: self.colors.map(usize::from),
            tick_ms: self.tick_ms,
        }
    }
}

/// Entry point for the Flood It command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file, args.overrides(), rand::random::<u64>);
    info!(
        "dealing {0}x{0} boards from {1} colors with seed {2}",
        settings.world.size(),
        settings.world.palette().len(),
        settings.world.seed()
    );

    let world = World::new(settings.world.clone()).context("failed to deal the first board")?;

    if args.headless {
        let stdin = io::stdin();
        return terminal::run(world, stdin.lock(), io::stdout().lock());
    }

    run_windowed(world, settings.tick_interval, args.vsync)
}

fn run_windowed(world: World, tick_interval: Duration, vsync: bool) -> Result<()> {
    let hud = Hud;
    let board = BoardPresentation::new(
        hud.grid(&world).size(),
        BoardPresentation::DEFAULT_CELL_LENGTH,
    )?;
    let mut scene = Scene::new(board, Vec::new(), String::new(), None, TEXT);
    populate_scene(&world, &hud, &mut scene);
    let presentation = Presentation::new(hud.welcome_banner(&world), BACKGROUND, scene);

    let mut world = world;
    let input = Input::new();
    let mut ticker = Ticker::new(TickerConfig::new(tick_interval));
    let mut commands = Vec::new();
    let mut events = Vec::new();

    MacroquadBackend::new().with_vsync(vsync).run(
        presentation,
        move |dt, frame: FrameInput, scene: &mut Scene| {
            commands.clear();
            input.handle(
                PlayerInput::new(frame.click, frame.reset, frame.cursor_cell),
                &mut commands,
            );
            ticker.handle(dt, &mut commands);

            for command in commands.drain(..) {
                events.clear();
                if let Err(error) = world::apply(&mut world, command, &mut events) {
                    warn!("command rejected: {error}");
                }
            }

            populate_scene(&world, &hud, scene);
        },
    )
}

fn populate_scene(world: &World, hud: &Hud, scene: &mut Scene) {
    scene.cells.clear();
    scene.cells.extend(hud.grid(world).cells().map(|(coord, color)| SceneCell {
        coord,
        color: Color::from(color),
    }));
    scene.counter = hud.click_counter(world);
    scene.end_message = hud.end_message(world).map(str::to_owned);
}
