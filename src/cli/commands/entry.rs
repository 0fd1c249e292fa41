use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::{ArgCompletion, CommandEntry};
use crate::core::{EntryInput, ItemKey};

use super::print_summary;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an income or expense",
            "add <inc|exp> <description> <value>",
            cmd_add,
        )
        .completing(ArgCompletion::Category),
        CommandEntry::new(
            "delete",
            "Remove an entry by its key",
            "delete <inc-N|exp-N>",
            cmd_delete,
        )
        .completing(ArgCompletion::ItemKey),
    ]
}

fn parse_add_args(args: &[&str]) -> Result<EntryInput, CommandError> {
    let usage =
        || CommandError::InvalidArguments("usage: add <inc|exp> <description> <value>".into());
    let (category, rest) = args.split_first().ok_or_else(usage)?;
    let (raw_value, words) = rest.split_last().ok_or_else(usage)?;
    if words.is_empty() {
        return Err(usage());
    }
    Ok(EntryInput::parse(category, &words.join(" "), raw_value)?)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = parse_add_args(args)?;

    let message = context.with_coordinator_mut(|coordinator| {
        let report = coordinator.add_item(input)?;
        let entry = report
            .entry
            .ok_or_else(|| CommandError::Message("add produced no entry".into()))?;
        let key = ItemKey::from(&entry);
        let value = coordinator
            .presenter()
            .row(key)
            .map(|row| row.value_label.clone())
            .unwrap_or_default();
        Ok(format!("Added {} {} ({})", key, entry.description(), value))
    })?;

    output::success(message);
    print_summary(context)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_key] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: delete <inc-N|exp-N>".into(),
        ));
    };
    let key: ItemKey = raw_key.parse()?;

    let report = context.with_coordinator_mut(|coordinator| Ok(coordinator.delete_item(key)))?;
    match report.entry {
        Some(entry) => output::success(format!("Deleted {} {}", key, entry.description())),
        None => output::info(format!("No entry `{}`; nothing to delete.", key)),
    }
    print_summary(context)
}
