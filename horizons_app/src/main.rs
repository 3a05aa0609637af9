// main.rs - Cellular Horizons desktop front end
// Draws the engine's board and forwards clicks, keys and ticks to it

use eframe::egui;
use egui::Color32;
use horizons_engine::{Config, EngineError, Notice, Pattern, Simulation, pattern};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;  // Argument parsing
mod ui;   // eframe::App impl

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let opts = cli::Opts::parse();

    let app = match HorizonsApp::from_opts(&opts) {
        Ok(app) => app,
        Err(err) => {
            error!(%err, "startup failed");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cellular Horizons",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Presentation state around the engine
pub struct HorizonsApp {
    pub sim: Simulation,
    pub patterns: Vec<Pattern>,
    pub live_color: Color32,
    pub shadow_rgb: [u8; 3],
    pub notice: Option<Notice>,
}

impl HorizonsApp {
    fn from_opts(opts: &cli::Opts) -> Result<Self, EngineError> {
        let mut config = match &opts.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(ms) = opts.tick_ms {
            config.tick_interval_ms = ms;
            config.validate()?;
        }

        let patterns = match &opts.patterns {
            Some(path) => pattern::load_patterns(path)?,
            None => pattern::builtin(),
        };
        info!(
            rows = config.rows,
            cols = config.cols,
            patterns = patterns.len(),
            "starting"
        );

        Ok(Self {
            sim: Simulation::new(config)?,
            patterns,
            live_color: Color32::from_rgb(251, 174, 58),
            shadow_rgb: [100, 100, 100],
            notice: None,
        })
    }
}
