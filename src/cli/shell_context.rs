//! Shared runtime state for CLI interactions and command execution.

use std::sync::{Arc, RwLock};

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::Coordinator,
    presenter::TerminalPresenter,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    /// One write guard is held for each whole add/delete cycle.
    pub coordinator: Arc<RwLock<Coordinator<TerminalPresenter>>>,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}
