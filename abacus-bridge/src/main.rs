use abacus_bridge::app::boot;
use abacus_bridge::keyboard::subscription;
use abacus_bridge::update::update;
use abacus_bridge::view_ui::{theme, title, view};

use anyhow::Context;
use iced::Settings;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("=== Calculator Starting ===");

    let settings = Settings {
        antialiasing: true,
        ..Settings::default()
    };

    iced::application(boot, update, view)
        .title(title)
        .theme(theme)
        .subscription(subscription)
        .settings(settings)
        .window_size((420.0, 720.0))
        .run()
        .context("calculator window failed")
}
