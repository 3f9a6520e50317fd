#![forbid(unsafe_code)]

//! Stockbook binary entry point.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use ftui_runtime::{Program, ProgramConfig, ScreenMode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stockbook::app::AppModel;
use stockbook::cli;
use stockbook::i18n::Localizer;
use stockbook::routes;

fn main() {
    let opts = cli::Opts::parse();

    // Logging goes to a file or nowhere; stderr belongs to the
    // terminal UI while the program runs.
    if let Some(path) = &opts.log_file {
        match File::create(path) {
            Ok(file) => {
                let filter = EnvFilter::try_from_env("STOCKBOOK_LOG")
                    .unwrap_or_else(|_| EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                eprintln!("Cannot open log file {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    let mut store = match &opts.prefs_file {
        Some(path) => Localizer::with_prefs_file(PathBuf::from(path)),
        None => Localizer::new(),
    };
    if let Some(locale) = opts.locale {
        store.set_locale(locale);
    }

    let resolved = routes::resolve(&opts.route);
    if resolved.redirected {
        if opts.route == "/" {
            info!(to = resolved.page.path(), "root route, mounting default section");
        } else {
            warn!(
                requested = %opts.route,
                to = resolved.page.path(),
                "unmapped start route, redirecting"
            );
        }
    }

    let mut model = AppModel::new(store);
    model.current = resolved.page;
    model.inject_fault = opts.inject_fault;

    let screen_mode = match opts.screen_mode.as_str() {
        "inline" => ScreenMode::Inline {
            ui_height: opts.ui_height,
        },
        _ => ScreenMode::AltScreen,
    };

    let config = ProgramConfig {
        screen_mode,
        ..ProgramConfig::default()
    };
    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}
