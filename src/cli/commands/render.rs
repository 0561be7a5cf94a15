use anyhow::Result;

use super::{CommandResult, CommandSummary, RenderSummary, helper::open_resolver};
use crate::cli::args::RenderCommand;

pub fn render(cmd: RenderCommand) -> Result<CommandResult> {
    let resolver = open_resolver(&cmd.lookup)?;
    let locale = resolver.locale();

    Ok(CommandResult::output(CommandSummary::Render(
        RenderSummary {
            section: cmd.section,
            locale,
            text: cmd.section.render(&resolver, locale),
        },
    )))
}
