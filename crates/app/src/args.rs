//! Minimal command-line handling for the desktop binary.

use std::path::PathBuf;

/// Reads `--save PATH` or `--save=PATH`. Other arguments are ignored.
pub fn resolve_save_path_from_args(args: &[String]) -> Result<Option<PathBuf>, String> {
    let mut selected = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--save" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --save".to_string());
            };
            if selected.is_some() {
                return Err("save path provided more than once".to_string());
            }
            selected = Some(parse_save_path(value)?);
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--save=") {
            if selected.is_some() {
                return Err("save path provided more than once".to_string());
            }
            selected = Some(parse_save_path(value)?);
        }
        index += 1;
    }

    Ok(selected)
}

fn parse_save_path(raw_value: &str) -> Result<PathBuf, String> {
    if raw_value.trim().is_empty() {
        return Err("save path must not be empty".to_string());
    }
    Ok(PathBuf::from(raw_value))
}
