//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    gutter_visible: bool,
    config_global_path: Option<PathBuf>,
}

impl App {
    /// Create a new application.
    pub const fn new() -> Self {
        Self {
            gutter_visible: true,
            config_global_path: None,
        }
    }

    /// Enable or disable the line-number gutter.
    pub const fn with_gutter(mut self, visible: bool) -> Self {
        self.gutter_visible = visible;
        self
    }

    /// Set the config path to show in help.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_global_path = path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
