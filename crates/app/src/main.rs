mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;
use std::error::Error;
use std::io;
use std::process;

use app::app_loop::{AppExit, AppState};
use app::args::resolve_save_path_from_args;
use app::settings::{AppSettings, resolve_save_path};
use macroquad::prelude::{BLACK, clear_background, mouse_position, next_frame};
use macroquad::window::{Conf, screen_height, screen_width};
use taffy::TaffyTree;
use tileworld::FileStore;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::frame_input::{KeyboardInput, capture_ui_scale_action};
use crate::game_layout::{compute_frame_layout, setup_layout};
use crate::ui_render::draw_frame;
use crate::window_config::{build_window_conf, runtime_ui_scale};

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let code = match run().await {
        Ok(exit) => {
            info!(?exit, "session ended");
            exit.exit_code()
        }
        Err(message) => {
            error!(%message, "tileworld stopped");
            1
        }
    };
    process::exit(code);
}

async fn run() -> Result<AppExit, String> {
    let args: Vec<String> = env::args().collect();
    let cli_save_path = resolve_save_path_from_args(&args)?;

    let settings_path = AppSettings::get_default_path();
    let mut settings =
        settings_path.as_deref().map(AppSettings::load_or_default).unwrap_or_default();
    let save_path = resolve_save_path(cli_save_path, &settings);
    info!(save_path = %save_path.display(), light_radius = settings.light_radius, "starting");

    let mut store = FileStore::new(save_path);
    let mut ui_scale = runtime_ui_scale(settings.ui_scale);
    let mut taffy = TaffyTree::new();
    let nodes = setup_layout(&mut taffy).map_err(|err| err.to_string())?;
    let mut app_state = AppState::new();
    let mut keyboard = KeyboardInput::default();

    loop {
        if let Some(action) = capture_ui_scale_action() {
            ui_scale = action.apply(ui_scale);
            settings.ui_scale = Some(ui_scale);
            if let Some(path) = settings_path.as_deref()
                && let Err(err) = settings.write_atomic(path)
            {
                warn!(path = %path.display(), error = %err, "failed to persist ui scale");
            }
        }

        keyboard.capture();
        if let Some(exit) = app_state.tick(&mut keyboard, &mut store).map_err(|err| chain(&err))? {
            return Ok(exit);
        }

        clear_background(BLACK);
        let layout = compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height())
            .map_err(|err| err.to_string())?;
        draw_frame(&app_state, &layout, ui_scale, settings.light_radius, mouse_position());
        next_frame().await;
    }
}

fn chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
