//! ted - a minimal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! ted
//! ted --no-gutter
//! ted --render-debug-log ted.log
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ted::app::App;
use ted::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags, ConfigFlags,
};
use ted::perf;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "ted", version, about, long_about = None)]
struct Cli {
    /// Hide the line-number gutter
    #[arg(long)]
    no_gutter: bool,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed frame/event debug events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults in the global config
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("TED_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize event log {}: {}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    // Run the application
    let mut app = App::new()
        .with_gutter(!effective.no_gutter)
        .with_config_path(Some(global_path));

    app.run().context("Application error")
}
