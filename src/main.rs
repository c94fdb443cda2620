#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use clap::Parser;
use eframe::{NativeOptions, egui};

use chartbot::config::{APP, PERSISTENCE};
use chartbot::{Cli, run_app, run_headless};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Locate tesseract once; both modes share the analyzer
    let analyzer = args.analyzer();

    // D. Headless: print and exit
    if args.headless {
        let image = args
            .image
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("--headless needs --image <PATH>"))?;
        println!("{}", run_headless(&analyzer, image, args.json)?);
        return Ok(());
    }

    // E. Run Native App
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP.title)
            .with_inner_size(APP.initial_window_size)
            .with_min_inner_size(APP.min_window_size),
        persistence_path: Some(PathBuf::from(PERSISTENCE.app_state_path)),
        ..Default::default()
    };

    let initial_image = args.image.clone();
    eframe::run_native(
        APP.title,
        options,
        Box::new(move |cc| Ok(run_app(cc, analyzer, initial_image))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
