use anyhow::Result;

use super::{CommandResult, CommandSummary, ListSummary, helper::open_resolver};
use crate::cli::args::ListCommand;

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let resolver = open_resolver(&cmd.lookup)?;
    let items = resolver.ta(&cmd.path).to_vec();

    Ok(CommandResult::output(CommandSummary::List(ListSummary {
        locale: resolver.locale(),
        path: cmd.path,
        items,
    })))
}
