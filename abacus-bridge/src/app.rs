//! Application state and boot logic.

use crate::messages::Message;
use crate::renderer::ThemeName;

use abacus_core::keypad::Keypad;
use abacus_core::{CalculatorEngine, Config};

use std::path::PathBuf;

use iced::Task;

// ────────────────────────────────────────────────────────────────
// CalculatorApp
// ────────────────────────────────────────────────────────────────

pub struct CalculatorApp {
    pub engine: CalculatorEngine,
    pub keypad: Keypad,

    /// Active colour theme
    pub theme_name: ThemeName,

    /// Loaded configuration, written back when the theme changes.
    pub config: Config,
    /// Where to persist `config`. `None` keeps everything in memory.
    pub config_path: Option<PathBuf>,

    /// One-line feedback under the display (clipboard result etc).
    pub status: Option<String>,
}

impl CalculatorApp {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let theme_name = match ThemeName::from_str(&config.appearance.theme) {
            Some(t) => t,
            None => {
                tracing::warn!(
                    "Unknown theme {:?} in config, using Default",
                    config.appearance.theme
                );
                ThemeName::Default
            }
        };

        Self {
            engine: CalculatorEngine::with_config(config.display.clone()),
            keypad: Keypad::standard(),
            theme_name,
            config,
            config_path,
            status: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Boot
// ────────────────────────────────────────────────────────────────

pub fn boot() -> (CalculatorApp, Task<Message>) {
    let path = match Config::default_path() {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!("{}; settings will not be saved", e);
            None
        }
    };

    let config = match path.as_deref().map(Config::load_from) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("{:#}; using default settings", anyhow::Error::new(e));
            Config::default()
        }
        None => Config::default(),
    };

    let app = CalculatorApp::new(config, path);
    tracing::info!("Calculator ready (theme: {})", app.theme_name.label());

    (app, Task::none())
}
