//! Full-screen TUI implementation for TierCheck.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{auth, home};
pub use runtime::TuiRuntime;
use tiercheck_core::config::Config;
use tiercheck_core::gateway::AuthGateway;
use tiercheck_core::session::SessionStore;

/// Runs the interactive client against the configured backend.
pub async fn run_interactive(config: &Config, session: SessionStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("TierCheck is an interactive client and requires a terminal.");
    }

    let base_url = config.validated_base_url()?;
    tracing::info!(%base_url, "starting interactive client");

    let gateway = AuthGateway::new(base_url);
    let mut runtime = TuiRuntime::new(gateway, session)?;
    runtime.run()?;

    // Print goodbye after the alternate screen is restored
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
