//! Update logic — the central message handler.

use crate::app::CalculatorApp;
use crate::messages::Message;

use iced::Task;

pub fn update(app: &mut CalculatorApp, message: Message) -> Task<Message> {
    match message {
        // ────────────────────────────────────────────────────
        // Calculator input
        // ────────────────────────────────────────────────────

        Message::Input(command) => {
            app.engine.apply(command);
            app.status = None;
            Task::none()
        }

        // ────────────────────────────────────────────────────
        // Clipboard
        // ────────────────────────────────────────────────────

        Message::CopyToClipboard => {
            let text = app.engine.rendered();

            match copypasta::ClipboardContext::new() {
                Ok(mut ctx) => {
                    use copypasta::ClipboardProvider;
                    match ctx.set_contents(text.clone()) {
                        Ok(()) => {
                            tracing::info!("Copied {:?} to clipboard", text);
                            app.status = Some(format!("📋 Copied {}", text));
                        }
                        Err(e) => {
                            tracing::warn!("Clipboard write failed: {}", e);
                            app.status = Some("⚠ Clipboard unavailable.".to_string());
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Clipboard unavailable: {}", e);
                    app.status = Some("⚠ Clipboard unavailable.".to_string());
                }
            }
            Task::none()
        }

        // ────────────────────────────────────────────────────
        // Theme
        // ────────────────────────────────────────────────────

        Message::CycleTheme => {
            app.theme_name = app.theme_name.next();
            app.config.appearance.theme = app.theme_name.label().to_string();
            tracing::info!("Theme switched to: {}", app.theme_name.label());

            if let Some(path) = &app.config_path {
                if let Err(e) = app.config.save_to(path) {
                    tracing::warn!("Failed to save theme: {:#}", anyhow::Error::new(e));
                }
            }
            Task::none()
        }
    }
}
