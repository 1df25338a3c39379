//! Core library for the underlay desktop surface.
//!
//! Platform-independent pieces of the underlay click target: the menu tree
//! data model and builder, configuration loading with built-in fallbacks,
//! and detached command launching. The GTK4 layer-shell frontend lives in
//! `underlay-gtk`.

pub mod config;
pub mod launcher;
pub mod menu;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use launcher::CommandLauncher;
pub use menu::{MenuNode, MenuRecord, MenuTree};
