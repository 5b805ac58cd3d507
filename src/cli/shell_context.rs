use std::io::{self, Lines, StdinLock};

use dialoguer::theme::ColorfulTheme;
use thiserror::Error;

use crate::{
    config,
    errors::LedgerError,
    ledger::Ledger,
    storage::{JsonStore, StorageBackend},
};

use super::io as cli_io;

/// Top-level CLI failure that terminates the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Command failed: {0}")]
    Command(#[from] CommandError),
}

/// Per-command failure; reported to the user while the menu loop continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Prompt(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Mutable session state shared by the menu loop and the command handlers.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    theme: ColorfulTheme,
    ledger: Ledger,
    store: JsonStore,
    script_lines: Option<Lines<StdinLock<'static>>>,
}

impl ShellContext {
    /// Loads the ledger from the configured data file. A corrupt file is
    /// fatal here; a missing one starts an empty session.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let store = JsonStore::new(config::data_file_path());
        let ledger = store.load()?;
        let script_lines = match mode {
            CliMode::Script => Some(io::stdin().lines()),
            CliMode::Interactive => None,
        };
        Ok(Self {
            mode,
            running: true,
            theme: ColorfulTheme::default(),
            ledger,
            store,
            script_lines,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Persists the in-memory ledger after a mutation.
    pub fn persist(&self) -> Result<(), CommandError> {
        self.store.save(&self.ledger).map_err(CommandError::from)
    }

    /// Reads one form answer: a themed prompt in interactive mode, the next
    /// stdin line in script mode. `None` means the input was closed.
    pub fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        match self.mode {
            CliMode::Interactive => {
                let value = cli_io::prompt_text(&self.theme, prompt)?;
                Ok(Some(value))
            }
            CliMode::Script => match self.script_lines.as_mut().and_then(|lines| lines.next()) {
                Some(line) => Ok(Some(line.map_err(LedgerError::from)?)),
                None => Ok(None),
            },
        }
    }

    /// Next menu line in script mode; `None` at end of input.
    pub(crate) fn next_script_line(&mut self) -> Result<Option<String>, CliError> {
        match self.script_lines.as_mut().and_then(|lines| lines.next()) {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    /// Asks whether an interrupted session should really end.
    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        match self.mode {
            CliMode::Interactive => {
                cli_io::confirm_action(&self.theme, "Exit the ledger?", true).map_err(CliError::from)
            }
            CliMode::Script => Ok(true),
        }
    }

    pub fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        cli_io::print_error(&err);
        Ok(())
    }
}
