pub mod config;
pub mod entry;
pub mod system;
pub mod view;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in entry::definitions()
        .into_iter()
        .chain(view::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Prints the current summary labels held by the presenter.
pub(crate) fn print_summary(context: &ShellContext) -> CommandResult {
    let lines = context.with_coordinator(|coordinator| Ok(coordinator.presenter().render_summary()))?;
    output::lines(&lines);
    Ok(())
}
