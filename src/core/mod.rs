//! Core infrastructure shared by the menus and the command line
//!
//! Configuration loading, terminal colors and status output.

pub mod config;
pub mod output;
pub mod style;
