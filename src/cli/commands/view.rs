use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

use super::print_summary;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show income and expense rows", "list", cmd_list),
        CommandEntry::new("summary", "Show budget totals", "summary", cmd_summary),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: list".into()));
    }
    let lines = context.with_coordinator(|coordinator| Ok(coordinator.presenter().render_list()))?;
    output::lines(&lines);
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: summary".into()));
    }
    print_summary(context)
}
