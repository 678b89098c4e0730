//! Interactive mode functionality - TUI mode

use anyhow::Result;
use postboard_core::Config;
use postboard_providers::Gateway;
use std::path::PathBuf;

use crate::ui::TuiApp;

/// Run a TUI session: load the data, then browse until quit
///
/// The terminal is restored even when the session fails.
///
/// # Errors
/// Returns an error if the terminal cannot be set up, drawn to, or restored.
pub async fn run_tui_interactive(
    gateway: Gateway,
    config: Config,
    config_path: Option<PathBuf>,
) -> Result<()> {
    tracing::info!("=== Session started ===");

    let mut tui_app = TuiApp::new(gateway, config, config_path)?;
    TuiApp::enable_raw_mode()?;

    let session = async {
        let quit_while_loading = tui_app.load().await?;
        if quit_while_loading {
            Ok(())
        } else {
            tui_app.run_event_loop()
        }
    }
    .await;

    let restored = tui_app.disable_raw_mode();
    tracing::info!("=== Session ended ===");

    session?;
    restored?;
    Ok(())
}
