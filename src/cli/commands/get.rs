use anyhow::Result;

use super::{CommandResult, CommandSummary, GetSummary, helper::open_resolver};
use crate::cli::args::GetCommand;

pub fn get(cmd: GetCommand) -> Result<CommandResult> {
    let resolver = open_resolver(&cmd.lookup)?;
    let text = resolver.t(&cmd.path).to_string();
    let fell_back = text == cmd.path;

    Ok(CommandResult::output(CommandSummary::Get(GetSummary {
        locale: resolver.locale(),
        fell_back,
        text,
        path: cmd.path,
    })))
}
