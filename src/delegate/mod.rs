//! Seams to the collaborators that do the real removal work.
//!
//! The Remove Menu only decides *who* handles a selection. Klipper removal is
//! handed to the Klipper setup entry point; Moonraker and Mainsail removal
//! are nested menus owned elsewhere. Both are reached through traits so the
//! menu can be driven against fakes, and wired to external commands in the
//! binary.

mod command;
mod context;
mod error;

pub use command::{CommandMenu, CommandSetup, shell_quote};
pub use context::Context;
pub use error::DelegateError;

use crate::core::config::DelegateCommands;
use crate::menu::MenuEntry;

/// Whether the setup entry point should install or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupIntent {
    Install,
    Remove,
}

impl SetupIntent {
    /// Argument appended to a command-backed setup invocation.
    pub fn as_arg(self) -> &'static str {
        match self {
            SetupIntent::Install => "install",
            SetupIntent::Remove => "remove",
        }
    }
}

/// The Klipper setup entry point.
pub trait KlipperSetup {
    fn run_setup(&mut self, intent: SetupIntent) -> Result<(), DelegateError>;
}

/// Collaborators the Remove Menu hands selections to.
pub struct Delegates {
    pub klipper_setup: Box<dyn KlipperSetup>,
    pub moonraker_remove: Box<dyn MenuEntry>,
    pub mainsail_remove: Box<dyn MenuEntry>,
}

impl Delegates {
    /// Command-backed collaborators, one per configured argv.
    pub fn from_commands(commands: &DelegateCommands, ctx: &Context) -> Self {
        Self {
            klipper_setup: Box::new(CommandSetup::new(commands.klipper_setup.clone(), ctx.clone())),
            moonraker_remove: Box::new(CommandMenu::new(
                "Moonraker remove menu",
                "moonraker_remove",
                commands.moonraker_remove.clone(),
                ctx.clone(),
            )),
            mainsail_remove: Box::new(CommandMenu::new(
                "Mainsail remove menu",
                "mainsail_remove",
                commands.mainsail_remove.clone(),
                ctx.clone(),
            )),
        }
    }
}
