//! Window configuration for the desktop app.

use std::env;

use app::APP_NAME;
use app::settings::{UI_SCALE_ENV, resolve_ui_scale};
use macroquad::window::{Conf, screen_dpi_scale};

const DEFAULT_WINDOW_WIDTH: i32 = 1100;
const DEFAULT_WINDOW_HEIGHT: i32 = 700;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Request a high-DPI framebuffer so glyphs track display scale.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale(persisted_ui_scale: Option<f32>) -> f32 {
    let override_value = env::var(UI_SCALE_ENV).ok();
    resolve_ui_scale(screen_dpi_scale(), persisted_ui_scale, override_value.as_deref())
}
