use anyhow::Result;

use super::{CommandResult, CommandSummary, KeysSummary, helper::open_resolver};
use crate::cli::args::KeysCommand;

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let resolver = open_resolver(&cmd.lookup)?;
    let locale = resolver.locale();

    let entries = resolver
        .catalog()
        .table(locale)
        .root
        .leaves()
        .into_iter()
        .filter(|(path, _)| match &cmd.prefix {
            Some(prefix) => is_under(path, prefix),
            None => true,
        })
        .filter_map(|(path, node)| Some((path, node.value_type()?)))
        .collect();

    Ok(CommandResult::output(CommandSummary::Keys(KeysSummary {
        locale,
        entries,
    })))
}

/// `path` equals `prefix` or lies below it ("pricing" matches
/// "pricing.title" but not "pricingLink").
fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('.');
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('.'))
}
