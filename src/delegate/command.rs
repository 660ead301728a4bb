//! Collaborators backed by external commands.

use std::process::Command;

use super::context::Context;
use super::error::DelegateError;
use super::{KlipperSetup, SetupIntent};
use crate::menu::{MenuEntry, MenuExit, Session};

/// Shell-quote a value for display.
pub fn shell_quote(s: impl std::fmt::Display) -> String {
    let s = s.to_string();
    if !s.is_empty()
        && s.chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.' || c == '/')
    {
        s
    } else {
        format!("'{}'", s.replace('\'', "'\"'\"'"))
    }
}

/// Run `argv` in the foreground with the terminal inherited.
fn run_command(ctx: &Context, what: &'static str, argv: &[String]) -> Result<(), DelegateError> {
    let (program, args) = argv.split_first().ok_or(DelegateError::EmptyCommand(what))?;
    let shown = argv.iter().map(shell_quote).collect::<Vec<_>>().join(" ");

    if ctx.verbose || ctx.dry_run {
        eprintln!(
            "[{}] {}",
            if ctx.dry_run { "dry-run" } else { "exec" },
            shown
        );
    }

    if ctx.dry_run {
        return Ok(());
    }

    tracing::debug!(what, cmd = %shown, "running delegate");
    let status = Command::new(program).args(args).status()?;

    if !status.success() {
        return Err(DelegateError::CommandFailed {
            cmd: shown,
            code: status.code(),
        });
    }

    Ok(())
}

/// Klipper setup entry point run as `<argv...> install|remove`.
#[derive(Debug, Clone)]
pub struct CommandSetup {
    argv: Option<Vec<String>>,
    ctx: Context,
}

impl CommandSetup {
    pub fn new(argv: Option<Vec<String>>, ctx: Context) -> Self {
        Self { argv, ctx }
    }
}

impl KlipperSetup for CommandSetup {
    fn run_setup(&mut self, intent: SetupIntent) -> Result<(), DelegateError> {
        let Some(argv) = &self.argv else {
            return Err(DelegateError::NotConfigured {
                what: "Klipper setup",
                key: "klipper_setup",
            });
        };
        if argv.is_empty() {
            return Err(DelegateError::EmptyCommand("Klipper setup"));
        }
        let mut full = argv.clone();
        full.push(intent.as_arg().to_string());
        run_command(&self.ctx, "Klipper setup", &full)
    }
}

/// A nested menu provided by an external program.
///
/// The program owns the terminal until it exits; a clean exit counts as
/// going back.
#[derive(Debug, Clone)]
pub struct CommandMenu {
    what: &'static str,
    key: &'static str,
    argv: Option<Vec<String>>,
    ctx: Context,
}

impl CommandMenu {
    pub fn new(what: &'static str, key: &'static str, argv: Option<Vec<String>>, ctx: Context) -> Self {
        Self { what, key, argv, ctx }
    }
}

impl MenuEntry for CommandMenu {
    fn enter(&mut self, session: &mut Session<'_>) -> Result<MenuExit, DelegateError> {
        let Some(argv) = &self.argv else {
            return Err(DelegateError::NotConfigured {
                what: self.what,
                key: self.key,
            });
        };
        session.flush()?;
        run_command(&self.ctx, self.what, argv)?;
        Ok(MenuExit::Back)
    }
}
