pub mod app_loop;
pub mod args;
pub mod settings;

pub const APP_NAME: &str = "Tileworld";
