//! Text for menus, the seed prompt, the status bar and the pointer HUD.

use app::app_loop::Screen;
use tileworld::{MAX_SEED_DIGITS, Session, format_snapshot_hash};

pub const TITLE: &str = "TILEWORLD";

pub fn menu_lines() -> [&'static str; 3] {
    ["NEW GAME (N)", "LOAD GAME (L)", "QUIT (Q)"]
}

pub fn seed_prompt_text() -> &'static str {
    "ENTER SEED & PRESS \"S\""
}

/// Typed digits, with anything past the significant prefix marked as ignored.
pub fn seed_echo_text(digits: &str) -> String {
    if digits.len() <= MAX_SEED_DIGITS {
        return digits.to_string();
    }
    let (used, ignored) = digits.split_at(MAX_SEED_DIGITS);
    format!("{used} (ignored: {ignored})")
}

pub fn status_text(session: &Session) -> String {
    match Screen::from(session.status()) {
        Screen::Menu => "Menu: N new game, L load, Q quit".to_string(),
        Screen::SeedEntry => format!("New game: {} digit(s) typed", session.seed_digits().len()),
        Screen::World => {
            let Some(world) = session.world() else {
                return String::new();
            };
            let light = if world.light_on() { "on" } else { "off" };
            format!(
                "Seed {}  light {light}  snapshot {}  WASD move, P/O light, :Q save & quit",
                world.seed(),
                format_snapshot_hash(world.snapshot_hash())
            )
        }
    }
}

pub fn hud_text(description: Option<&str>) -> String {
    match description {
        Some(description) => format!("Pointer: {description}"),
        None => "Pointer: -".to_string(),
    }
}
