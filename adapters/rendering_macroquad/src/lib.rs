#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for Flood It.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, so the dependency is declared without its default `audio`
//! feature.

use anyhow::Result;
use glam::Vec2;
use macroquad::{
    input::{is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton},
    shapes::draw_rectangle,
    text::{draw_text, measure_text},
};
use flood_it_rendering::{Color, FrameInput, Presentation, RenderingBackend, Scene};
use std::time::Duration;

const COUNTER_FONT_SIZE: u16 = 24;
const MESSAGE_FONT_SIZE: u16 = 28;

/// Snapshot of edge-triggered keyboard shortcuts observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    quit_requested: bool,
    /// `R` deals a new board.
    reset_requested: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        Self {
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            reset_requested: is_key_pressed(KeyCode::R),
        }
    }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Presentation {
            window_title,
            clear_color,
            scene,
        } = presentation;

        let window = scene.board.window_size();
        let mut config = macroquad::window::Conf {
            window_title,
            window_width: window.x.ceil() as i32,
            window_height: window.y.ceil() as i32,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = self.swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);

            loop {
                let keyboard = KeyboardShortcuts::poll();
                if keyboard.quit_requested {
                    break;
                }

                macroquad::window::clear_background(background);

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let (cursor_x, cursor_y) = mouse_position();
                let frame_input = gather_frame_input(
                    &scene,
                    Vec2::new(cursor_x, cursor_y),
                    is_mouse_button_pressed(MouseButton::Left),
                    keyboard.reset_requested,
                );

                update_scene(frame_dt, frame_input, &mut scene);

                draw_cells(&scene);
                draw_status_text(&scene);

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn gather_frame_input(scene: &Scene, cursor_position: Vec2, click: bool, reset: bool) -> FrameInput {
    let cursor_cell = scene.board.cell_at(cursor_position);
    FrameInput {
        click: click && cursor_cell.is_some(),
        reset,
        cursor_cell,
    }
}

fn draw_cells(scene: &Scene) {
    let length = scene.board.cell_length;
    for cell in &scene.cells {
        let origin = scene.board.cell_origin(cell.coord);
        draw_rectangle(origin.x, origin.y, length, length, to_macroquad_color(cell.color));
    }
}

fn draw_status_text(scene: &Scene) {
    let color = to_macroquad_color(scene.text_color);
    draw_centered(&scene.counter, scene.board.counter_anchor(), COUNTER_FONT_SIZE, color);
    if let Some(message) = &scene.end_message {
        draw_centered(message, scene.board.message_anchor(), MESSAGE_FONT_SIZE, color);
    }
}

fn draw_centered(text: &str, anchor: Vec2, font_size: u16, color: macroquad::color::Color) {
    let dimensions = measure_text(text, None, font_size, 1.0);
    let x = anchor.x - dimensions.width / 2.0;
    let y = anchor.y + dimensions.height / 2.0;
    draw_text(text, x, y, f32::from(font_size), color);
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
