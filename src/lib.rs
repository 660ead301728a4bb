//! Text-menu front-end for removing Klipper and its companion services
//!
//! The Remove Menu lists every component the installer knows about, grouped
//! by category, and hands a numeric selection to the routine responsible for
//! it:
//!
//! ```text
//! /=======================================================\
//! | ~~~~~~~~~~~~~~~~~~ [ Remove Menu ] ~~~~~~~~~~~~~~~~~~ |
//! |-------------------------------------------------------|
//! | INFO: Configurations and/or any backups will be kept! |
//! |-------------------------------------------------------|
//! | Firmware & API:           | Webcam Streamer:          |
//! |  1) [Klipper]             |  6) [Crowsnest]           |
//! |  2) [Moonraker]           |  7) [MJPG-Streamer]       |
//! ...
//! ```
//!
//! # Handlers
//!
//! - `1` Klipper - the Klipper setup entry point, with the removal intent
//! - `2` Moonraker, `3` Mainsail - nested remove menus
//! - `4`..`13` - routines without a body yet, which print their name
//!
//! The collaborators behind `1`..`3` are traits in [`delegate`]. The `kiauh`
//! binary wires them to external commands configured in `kiauh.toml`.

pub mod component;
pub mod core;
pub mod delegate;
pub mod menu;

pub use component::{Category, Component};
pub use crate::core::config::Config;
pub use crate::core::output;
pub use crate::core::style::{ColorMode, Palette};
pub use delegate::{Delegates, KlipperSetup, SetupIntent};
pub use menu::{Menu, MenuEntry, MenuExit, RemoveMenu, Session};
