use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{ArgCompletion, CommandEntry};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )
    .completing(ArgCompletion::Config)]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show(context),
        ["set", key, value] => set(context, key, value),
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::info(format!("  {:<20} {}", key, value));
    }
    output::info(format!("  Stored at {}", context.config_manager.path().display()));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    context.config.set(key, value)?;
    context.persist_config()?;

    let config = context.config.clone();
    output::set_preferences(OutputPreferences::from(&config));
    context.with_coordinator_mut(|coordinator| {
        coordinator.presenter_mut().apply_config(&config);
        Ok(())
    })?;
    output::success(format!("Set {} = {}", key, value));
    Ok(())
}
