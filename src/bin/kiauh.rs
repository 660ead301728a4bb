//! KIAUH CLI - Klipper Installation And Update Helper
//!
//! Usage:
//!   kiauh remove                   Open the Remove Menu
//!   kiauh remove <component>       Run one removal handler without the menu
//!   kiauh targets                  List removable components

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiauh::delegate::{self, Delegates};
use kiauh::menu::remove::{MenuAction, Removal, action_for};
use kiauh::menu::{self, RemoveMenu, Session};
use kiauh::{Category, ColorMode, Component, Config, output};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kiauh")]
#[command(about = "Klipper Installation And Update Helper")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file, merged over the system and user configs
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, env = "KIAUH_COLOR")]
    color: Option<ColorMode>,

    /// Do not clear the screen before drawing a menu
    #[arg(long, global = true)]
    no_clear: bool,

    /// Print delegated commands instead of running them
    #[arg(short = 'n', long, global = true)]
    dry_run: bool,

    /// Show delegated commands and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove installed components
    Remove {
        /// Component id, name or menu number (opens the menu when omitted)
        component: Option<String>,
    },

    /// List removable components
    Targets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    if cli.dry_run {
        output::warning("dry run: delegated commands are printed, not executed");
    }
    let palette = cli.color.unwrap_or(config.color).resolve();
    let ctx = delegate::Context::default()
        .dry_run(cli.dry_run)
        .verbose(cli.verbose);
    let delegates = Delegates::from_commands(&config.delegates, &ctx);

    match cli.command {
        Commands::Remove { component: None } => {
            let clear = config.clear_screen && !cli.no_clear && io::stdout().is_terminal();
            let mut input = stdin_reader()?;
            let mut out = io::stdout().lock();
            let mut session = Session::new(&mut *input, &mut out, palette).clear_screen(clear);

            let mut remove_menu = RemoveMenu::new(delegates);
            let exit = menu::run(&mut remove_menu, &mut session)
                .context("Failed to drive the Remove Menu")?;
            tracing::debug!(?exit, "left Remove Menu");
        }

        Commands::Remove {
            component: Some(name),
        } => {
            let component = parse_component(&name)?;
            // A placeholder's label is its whole output
            if !matches!(action_for(component), MenuAction::Perform(Removal::Placeholder(_))) {
                output::action(&format!("Removing {}", component));
            }

            let mut input = stdin_reader()?;
            let mut out = io::stdout().lock();
            let mut session = Session::new(&mut *input, &mut out, palette);

            let mut remove_menu = RemoveMenu::new(delegates);
            remove_menu
                .dispatch(component, &mut session)
                .with_context(|| format!("Failed to remove {}", component))?;
        }

        Commands::Targets => list_targets(),
    }

    Ok(())
}

/// Route diagnostics to stderr so menu output stays byte-exact
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Stdin for the menu loop, read without buffering ahead of the answer so
/// delegated sub-menus see the rest of the input
#[cfg(unix)]
fn stdin_reader() -> Result<Box<dyn BufRead>> {
    use std::fs::File;
    use std::os::fd::AsFd;

    let fd = io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .context("Failed to duplicate stdin")?;
    Ok(Box::new(menu::line_reader(File::from(fd))))
}

#[cfg(not(unix))]
fn stdin_reader() -> Result<Box<dyn BufRead>> {
    Ok(Box::new(io::stdin().lock()))
}

/// Resolve a component argument, listing valid ids on failure
fn parse_component(name: &str) -> Result<Component> {
    name.parse::<Component>().map_err(|e| {
        let ids: Vec<_> = Component::ALL.iter().map(|c| c.id()).collect();
        anyhow::anyhow!("{}\nKnown components: {}", e, ids.join(", "))
    })
}

/// Print the removal table grouped by menu category
fn list_targets() {
    for category in Category::ALL {
        output::heading(category.heading());
        for component in Component::ALL.iter().filter(|c| c.category() == category) {
            output::list_item(component.selection(), component.display_name(), component.id());
        }
    }
}
