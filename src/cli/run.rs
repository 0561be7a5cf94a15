//! Dispatches a parsed command line to its command handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, get::get, init::init, keys::keys, list::list, render::render,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
