//! Rendering for the menu, the seed prompt and the world view.

use app::app_loop::{AppState, Screen};
use macroquad::prelude::*;
use tileworld::{Pos, Session, Tile, TileGrid, World, compute_visible};

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{TITLE, hud_text, menu_lines, seed_echo_text, seed_prompt_text, status_text};

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 12.0;
const PANEL_PAD_Y: f32 = 25.0;
const CELL_WIDTH: f32 = 12.0;
const CELL_HEIGHT: f32 = 18.0;
const MAP_FONT_SIZE: f32 = 22.0;

pub fn draw_frame(
    app_state: &AppState,
    layout: &FrameLayout,
    ui_scale: f32,
    light_radius: u32,
    pointer: (f32, f32),
) {
    let session = app_state.session();
    match app_state.screen() {
        Screen::Menu => draw_menu(ui_scale),
        Screen::SeedEntry => draw_seed_prompt(session, ui_scale),
        Screen::World => {
            draw_panel_borders(layout, ui_scale);
            draw_status_panel(session, layout.status, ui_scale);
            if let Some(world) = session.world() {
                let frame = compute_visible(world, light_radius).apply(world.grid());
                draw_map(&frame, layout.map, ui_scale);
                draw_hud(world, &frame, layout.map, layout.hud, ui_scale, pointer);
            }
        }
    }
}

fn draw_menu(ui_scale: f32) {
    let center_x = screen_width() / 2.0;
    let mut text_y = screen_height() / 3.0;
    draw_centered(TITLE, center_x, text_y, scaled(50.0, ui_scale), WHITE);
    text_y += scaled(80.0, ui_scale);
    for line in menu_lines() {
        draw_centered(line, center_x, text_y, scaled(26.0, ui_scale), LIGHTGRAY);
        text_y += scaled(40.0, ui_scale);
    }
}

fn draw_seed_prompt(session: &Session, ui_scale: f32) {
    let center_x = screen_width() / 2.0;
    let text_y = screen_height() / 3.0;
    draw_centered("NEW GAME", center_x, text_y, scaled(50.0, ui_scale), WHITE);
    draw_centered(
        seed_prompt_text(),
        center_x,
        text_y + scaled(80.0, ui_scale),
        scaled(22.0, ui_scale),
        LIGHTGRAY,
    );
    draw_centered(
        &seed_echo_text(session.seed_digits()),
        center_x,
        text_y + scaled(120.0, ui_scale),
        scaled(22.0, ui_scale),
        PINK,
    );
}

fn draw_centered(text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - size.width / 2.0, y, font_size, color);
}

fn draw_panel_borders(layout: &FrameLayout, ui_scale: f32) {
    for panel in layout.panels() {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            scaled(BORDER_THICKNESS, ui_scale),
            BORDER_COLOR,
        );
    }
}

fn draw_status_panel(session: &Session, panel: PanelRect, ui_scale: f32) {
    draw_text(
        &status_text(session),
        panel.x + scaled(PANEL_PAD_X, ui_scale),
        panel.y + scaled(PANEL_PAD_Y, ui_scale),
        scaled(20.0, ui_scale),
        WHITE,
    );
}

fn draw_map(frame: &TileGrid, panel: PanelRect, ui_scale: f32) {
    for pos in frame.positions() {
        let tile = frame.tile_at(pos);
        if tile == Tile::Nothing {
            continue;
        }
        let (x, y) = cell_origin(panel, pos, ui_scale);
        draw_text(
            &tile.glyph().to_string(),
            x,
            y + scaled(CELL_HEIGHT, ui_scale),
            scaled(MAP_FONT_SIZE, ui_scale),
            tile_color(tile),
        );
    }
}

/// Describes what the pointer hovers. Dark tiles read as nothing.
fn draw_hud(
    world: &World,
    frame: &TileGrid,
    map_panel: PanelRect,
    hud_panel: PanelRect,
    ui_scale: f32,
    pointer: (f32, f32),
) {
    let description = tile_under_pointer(map_panel, ui_scale, pointer)
        .filter(|&pos| frame.in_bounds(pos))
        .map(|pos| {
            if frame.tile_at(pos) == Tile::Nothing { "nothing" } else { world.describe(pos) }
        });
    draw_text(
        &hud_text(description),
        hud_panel.x + scaled(PANEL_PAD_X, ui_scale),
        hud_panel.y + scaled(PANEL_PAD_Y, ui_scale),
        scaled(20.0, ui_scale),
        YELLOW,
    );
}

fn cell_origin(panel: PanelRect, pos: Pos, ui_scale: f32) -> (f32, f32) {
    (
        panel.x + scaled(PANEL_PAD_X, ui_scale) + pos.x as f32 * scaled(CELL_WIDTH, ui_scale),
        panel.y + scaled(PANEL_PAD_X, ui_scale) + pos.y as f32 * scaled(CELL_HEIGHT, ui_scale),
    )
}

fn tile_under_pointer(panel: PanelRect, ui_scale: f32, pointer: (f32, f32)) -> Option<Pos> {
    let (pointer_x, pointer_y) = pointer;
    if !panel.contains(pointer_x, pointer_y) {
        return None;
    }
    let (origin_x, origin_y) = cell_origin(panel, Pos { y: 0, x: 0 }, ui_scale);
    let column = ((pointer_x - origin_x) / scaled(CELL_WIDTH, ui_scale)).floor();
    let row = ((pointer_y - origin_y) / scaled(CELL_HEIGHT, ui_scale)).floor();
    if column < 0.0 || row < 0.0 {
        return None;
    }
    Some(Pos { y: row as i32, x: column as i32 })
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Nothing => BLACK,
        Tile::Floor => GRAY,
        Tile::Wall => BROWN,
        Tile::Player => GREEN,
    }
}

fn scaled(value: f32, ui_scale: f32) -> f32 {
    value * ui_scale
}
