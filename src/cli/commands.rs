//! One-shot subcommands

use crate::cli::style::{cross, Stylize};
use anstream::{eprintln, println};
use dialoguer::{Confirm, Select};
use laspad_client::error::{Error, Result};
use laspad_client::session::{ControlSurface, Session, NEED_PROMPT};
use laspad_client::types::{Branch, ControlAction, ControlId, Outcome, ProjectState};

/// Parameterless server commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    /// `/update`
    Update,
    /// `/ns2`
    Ns2,
    /// `/editor`
    Editor,
}

/// Whether the last command succeeded; `false` means the server sent `ERR`
pub type Succeeded = bool;

/// Run a parameterless command
pub async fn run_simple(session: &mut Session, command: SimpleCommand) -> Result<Succeeded> {
    let outcome = match command {
        SimpleCommand::Update => session.update().await?,
        SimpleCommand::Ns2 => session.ns2().await?,
        SimpleCommand::Editor => session.editor().await?,
    };
    Ok(outcome.is_finished())
}

/// Add a dependency, prompting for the mod id when not given
pub async fn run_need(
    session: &mut Session,
    surface: &dyn ControlSurface,
    mod_id: Option<&str>,
) -> Result<Succeeded> {
    let mod_id = match mod_id {
        Some(id) => id.to_string(),
        None => surface
            .prompt(NEED_PROMPT)
            .ok_or_else(|| Error::Prompt("no mod id given".to_string()))?,
    };
    Ok(session.need(&mod_id).await?.is_finished())
}

/// Print the publishable branches
pub async fn run_branches(session: &mut Session) -> Result<Succeeded> {
    if !session.bootstrap().await?.is_finished() {
        return Ok(false);
    }

    let branches: Vec<&Branch> = session
        .controls()
        .branches()
        .filter_map(|c| match &c.action {
            ControlAction::Publish(branch) => Some(branch),
            _ => None,
        })
        .collect();

    if branches.is_empty() {
        println!("{}", "No publishable branches".muted());
    } else {
        println!("{}", "Branches".emphasis());
        for branch in branches {
            println!("  {}", branch.accent());
        }
    }
    Ok(true)
}

/// Publish a branch, selecting one from the server's list when not given
pub async fn run_publish(
    session: &mut Session,
    branch: Option<&str>,
    interactive: bool,
) -> Result<Succeeded> {
    if let Some(branch) = branch {
        return Ok(session.publish(&Branch::new(branch)).await?.is_finished());
    }

    if !session.bootstrap().await?.is_finished() {
        return Ok(false);
    }

    let choices: Vec<(ControlId, String)> = session
        .controls()
        .branches()
        .map(|c| (c.id, c.label.clone()))
        .collect();

    let id = match choices.as_slice() {
        [] => {
            eprintln!("{} {}", cross(), "No publishable branches".error());
            return Ok(false);
        }
        [(id, _)] => *id,
        _ if !interactive => {
            return Err(Error::Prompt(
                "several branches available, pass one explicitly".to_string(),
            ));
        }
        _ => {
            let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
            let index = tokio::task::block_in_place(|| {
                Select::new()
                    .with_prompt("Branch to publish")
                    .items(&labels)
                    .default(0)
                    .interact()
            })
            .map_err(|e| Error::Prompt(e.to_string()))?;
            choices[index].0
        }
    };

    Ok(session
        .activate(id)
        .await?
        .as_ref()
        .is_some_and(Outcome::is_finished))
}

/// Pick a project directory and create a project there if needed
///
/// A new project is created when `create` is set, or after confirmation in
/// interactive mode.
pub async fn run_open(session: &mut Session, interactive: bool, create: bool) -> Result<Succeeded> {
    match session.find_project().await? {
        None => Ok(false),
        Some(ProjectState::Existing) => {
            println!("Opened existing project");
            Ok(true)
        }
        Some(ProjectState::Unknown(payload)) => {
            eprintln!("{} unexpected project state {}", cross(), payload.error());
            Ok(false)
        }
        Some(ProjectState::New) => {
            let create = if create {
                true
            } else if interactive {
                tokio::task::block_in_place(|| {
                    Confirm::new()
                        .with_prompt("No laspad project here. Create one?")
                        .default(true)
                        .interact()
                })
                .map_err(|e| Error::Prompt(e.to_string()))?
            } else {
                false
            };

            if !create {
                println!("{}", "No laspad project here, pass --create to create one".muted());
                return Ok(false);
            }
            Ok(session.create_project().await?.is_finished())
        }
    }
}
