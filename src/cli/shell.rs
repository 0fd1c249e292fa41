use std::{
    io::{self, BufRead},
    sync::{Arc, RwLock},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::registry::ArgCompletion;
use crate::cli::{commands, output};
use crate::config::Config;
use crate::core::{Coordinator, ItemKey};
use crate::errors::CliError;
use crate::ledger::Category;
use crate::presenter::TerminalPresenter;

const SCRIPT_ENV: &str = "BUDGETY_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    if mode == CliMode::Script {
        colored::control::set_override(false);
    }

    let mut context = ShellContext::new(mode)?;
    tracing::debug!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(ShellHelper::new(context)));

    output::section("Budgety");
    output::info("Type `help` to list commands, `exit` to quit.");
    commands::print_summary(context)?;

    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        let line = editor.readline(&prompt);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(&err);
            return Ok(LoopControl::Continue);
        }
    };

    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }

    let raw = &tokens[0];
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// Line-editor helper completing command names and their arguments.
struct ShellHelper {
    commands: Vec<(&'static str, ArgCompletion)>,
    coordinator: Arc<RwLock<Coordinator<TerminalPresenter>>>,
}

impl ShellHelper {
    fn new(context: &ShellContext) -> Self {
        Self {
            commands: context
                .registry
                .list()
                .map(|entry| (entry.name, entry.args))
                .collect(),
            coordinator: Arc::clone(&context.coordinator),
        }
    }

    /// Candidates for `partial`, given the finished words before it.
    fn candidates(&self, words: &[&str], partial: &str) -> Vec<String> {
        let options = match words {
            [] => self.command_names(),
            [command, previous @ ..] => {
                let args = self
                    .commands
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(command))
                    .map(|(_, args)| *args)
                    .unwrap_or_default();
                self.argument_options(args, previous)
            }
        };
        let needle = partial.to_ascii_lowercase();
        options
            .into_iter()
            .filter(|option| option.starts_with(&needle))
            .collect()
    }

    fn argument_options(&self, args: ArgCompletion, previous: &[&str]) -> Vec<String> {
        match (args, previous) {
            (ArgCompletion::Category, []) => [Category::Income, Category::Expense]
                .into_iter()
                .map(|category| category.code().to_string())
                .collect(),
            (ArgCompletion::ItemKey, []) => self.item_keys(),
            (ArgCompletion::Config, []) => vec!["show".to_string(), "set".to_string()],
            (ArgCompletion::Config, ["set"]) => {
                Config::KEYS.iter().map(|key| key.to_string()).collect()
            }
            (ArgCompletion::Command, []) => self.command_names(),
            _ => Vec::new(),
        }
    }

    fn command_names(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    fn item_keys(&self) -> Vec<String> {
        let Ok(coordinator) = self.coordinator.read() else {
            return Vec::new();
        };
        let ledger = coordinator.ledger();
        ledger
            .income()
            .iter()
            .map(|entry| ItemKey::new(Category::Income, entry.id))
            .chain(
                ledger
                    .expenses()
                    .iter()
                    .map(|expense| ItemKey::new(Category::Expense, expense.entry.id)),
            )
            .map(|key| key.to_string())
            .collect()
    }
}

/// Byte offset where the word under the cursor begins.
fn word_start(prefix: &str) -> usize {
    let partial: usize = prefix
        .chars()
        .rev()
        .take_while(|ch| !ch.is_whitespace())
        .map(char::len_utf8)
        .sum();
    prefix.len() - partial
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = word_start(prefix);
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let pairs = self
            .candidates(&words, &prefix[start..])
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    Ok(split(input)?)
}

#[derive(Debug, thiserror::Error)]
#[error("could not parse command line: {0}")]
pub(crate) struct ParseError(#[from] shell_words::ParseError);
