use rustyline::{error::ReadlineError, DefaultEditor};
use shell_words::split;

use crate::ledger::TransactionKind;

use super::commands;
use super::io;
use super::menu::{MainMenu, MenuAction};
use super::output;
use super::shell_context::{CliError, CliMode, CommandError, LoopControl, ShellContext};

const SCRIPT_MODE_ENV: &str = "LEDGER_CORE_CLI_SCRIPT";
const MENU_PROMPT: &str = "Select (1-6): ";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    output::plain("Personal finance ledger");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let menu = MainMenu::new();

    loop {
        if !context.running {
            break;
        }
        menu.render();
        let line = editor.readline(MENU_PROMPT);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_line(context, &menu, trimmed) {
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
                io::print_info("Exiting.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let menu = MainMenu::new();

    loop {
        if !context.running {
            break;
        }
        menu.render();
        let Some(line) = context.next_script_line()? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match handle_line(context, &menu, trimmed) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }

    Ok(())
}

fn handle_line(
    context: &mut ShellContext,
    menu: &MainMenu,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            io::print_warning(err.to_string());
            return Ok(LoopControl::Continue);
        }
    };

    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    let Some(action) = menu.resolve(raw) else {
        match menu.suggest(raw) {
            Some(alias) => io::print_warning(format!(
                "Unknown choice `{raw}`. Did you mean `{alias}`?"
            )),
            None => io::print_warning(format!("Unknown choice `{raw}`. Enter 1-6.")),
        }
        return Ok(LoopControl::Continue);
    };

    dispatch(context, action, &args)
}

fn dispatch(
    context: &mut ShellContext,
    action: MenuAction,
    args: &[&str],
) -> Result<LoopControl, CommandError> {
    match action {
        MenuAction::AddIncome => commands::add_transaction(context, TransactionKind::Income)?,
        MenuAction::AddExpense => commands::add_transaction(context, TransactionKind::Expense)?,
        MenuAction::Summary => commands::show_summary(context, args.first().copied())?,
        MenuAction::ListAll => commands::list_all(context)?,
        MenuAction::DeleteLast => commands::delete_last(context)?,
        MenuAction::Exit => {
            context.running = false;
            io::print_info("Goodbye!");
            return Ok(LoopControl::Exit);
        }
    }
    Ok(LoopControl::Continue)
}
