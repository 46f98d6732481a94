//! Interactive menu over every registered control

use crate::cli::surface::TerminalSurface;
use crate::cli::style::{cross, Stylize};
use anstream::{eprintln, println};
use dialoguer::Select;
use laspad_client::error::{Error, Result};
use laspad_client::session::Session;
use tracing::debug;

/// Run the interactive menu (default when no subcommand given)
///
/// Fetches the branch list once, then lets the operator activate controls
/// until they quit. Transport failures are reported and the menu stays open.
pub async fn run_interactive(session: &mut Session, surface: &TerminalSurface) -> Result<()> {
    match session.bootstrap().await {
        Ok(outcome) if !outcome.is_finished() => {
            eprintln!("{} {}", cross(), "Could not load branches".error());
        }
        Ok(_) => {}
        Err(e @ Error::Http(_)) => debug!(error = %e, "branch list unavailable"),
        Err(e) => return Err(e),
    }

    loop {
        let entries: Vec<_> = surface.menu().into_iter().filter(|e| e.enabled).collect();
        if entries.is_empty() {
            println!("{}", "No controls available".muted());
            return Ok(());
        }

        let mut items: Vec<String> = entries.iter().map(|e| e.text.clone()).collect();
        items.push("Quit".muted().to_string());

        println!();
        let choice = tokio::task::block_in_place(|| {
            Select::new()
                .with_prompt("laspad")
                .items(&items)
                .default(0)
                .interact_opt()
        })
        .map_err(|e| Error::Prompt(e.to_string()))?;

        let Some(index) = choice.filter(|i| *i < entries.len()) else {
            return Ok(());
        };

        match session.activate(entries[index].id).await {
            Ok(_) | Err(Error::Http(_)) => {}
            Err(e) => return Err(e),
        }
    }
}
