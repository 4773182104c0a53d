// ABOUTME: Interactive browsing shell for the mixmaster CLI
// ABOUTME: Reads commands from stdin while lookups resolve in the background
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use std::sync::Arc;

use anyhow::Result;
use mixmaster::config::BrowserConfig;
use mixmaster::engine::ActiveFilter;
use mixmaster::providers::RecipeSource;
use mixmaster::session::BrowserSession;
use mixmaster::state::Intent;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::helpers::display::{display_help, Tab, TerminalRenderer};

/// One parsed shell line
#[derive(Debug)]
enum ShellCommand {
    Dispatch(Intent),
    Show(Tab),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let command = match verb.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Dispatch(Intent::ChangeSearchTerm(rest.to_owned())),
        "refresh" => ShellCommand::Dispatch(Intent::Refresh),
        "filter" => {
            let filter: ActiveFilter = rest.parse().map_err(|e| format!("{e}"))?;
            ShellCommand::Dispatch(Intent::ChangeFilter(filter))
        }
        "list" | "ls" => ShellCommand::Show(Tab::Cocktails),
        "favorites" | "favs" => ShellCommand::Show(Tab::Favorites),
        "bar" => parse_bar(rest)?,
        "fav" | "star" => ShellCommand::Dispatch(Intent::ToggleFavorite(required(rest, "id")?)),
        "show" | "open" => ShellCommand::Dispatch(Intent::SelectRecipe(required(rest, "id")?)),
        "close" | "back" => ShellCommand::Dispatch(Intent::DismissDetail),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}', type `help`")),
    };
    Ok(Some(command))
}

fn parse_bar(rest: &str) -> Result<ShellCommand, String> {
    if rest.is_empty() {
        return Ok(ShellCommand::Show(Tab::MyBar));
    }
    let (action, name) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(action, name)| (action, name.trim()));
    let name = required(name, "ingredient name")?;
    let intent = match action.to_lowercase().as_str() {
        "add" => Intent::AddInventoryItem(name),
        "remove" | "rm" => Intent::RemoveInventoryItem(name),
        "toggle" => Intent::ToggleInventoryItem(name),
        other => {
            return Err(format!(
                "unknown bar action '{other}', expected add, remove, or toggle"
            ))
        }
    };
    Ok(ShellCommand::Dispatch(intent))
}

fn required(value: &str, what: &str) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("missing {what}"))
    } else {
        Ok(value.to_owned())
    }
}

/// Run the interactive shell until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading stdin fails
pub async fn run(source: Arc<dyn RecipeSource>, config: &BrowserConfig) -> Result<()> {
    let mut session = BrowserSession::new(source, config.lookup_timeout);
    let mut renderer = TerminalRenderer::default();
    let mut lines = BufReader::new(io::stdin()).lines();

    println!("MixMaster - type `help` for commands");
    session.start();
    session.render(&mut renderer);

    loop {
        tokio::select! {
            Some(seq) = session.next_resolution(), if session.in_flight() > 0 => {
                debug!(lookup.seq = seq, "Lookup resolved");
                if !session.view().loading {
                    session.render(&mut renderer);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(None) => {}
                    Ok(Some(ShellCommand::Quit)) => break,
                    Ok(Some(ShellCommand::Help)) => display_help(),
                    Ok(Some(ShellCommand::Show(tab))) => {
                        renderer.show(tab);
                        session.dispatch(Intent::DismissDetail);
                        session.render(&mut renderer);
                    }
                    Ok(Some(ShellCommand::Dispatch(intent))) => {
                        if matches!(intent, Intent::ChangeFilter(_) | Intent::ChangeSearchTerm(_)) {
                            renderer.show(Tab::Cocktails);
                        }
                        session.dispatch(intent);
                        session.render(&mut renderer);
                    }
                    Err(message) => println!("! {message}"),
                }
            }
        }
    }

    info!(
        favorites = session.state().favorites().len(),
        inventory = session.state().inventory().len(),
        "Browsing session ended"
    );
    Ok(())
}
