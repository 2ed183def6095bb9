//! Singularis Inventory console runtime
//!
//! Hosts one local player's inventory without an engine: hotkeys and
//! inventory commands are read from stdin, the hotbar is printed after
//! every command.
//!
//! Run with: cargo run -p singularis_runtime [-- path/to/inventory.toml]
//!
//! # Configuration Sources (in priority order)
//!
//! 1. First command line argument
//! 2. Environment variable: `SINGULARIS_INVENTORY_CONFIG`
//! 3. `inventory.toml` in the working directory
//! 4. Built-in defaults

mod command;
mod host;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use singularis_inventory::InventoryConfig;

use crate::command::Command;
use crate::host::{Host, Outcome};

const CONFIG_ENV: &str = "SINGULARIS_INVENTORY_CONFIG";
const DEFAULT_CONFIG: &str = "inventory.toml";

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut host = match Host::new(&config) {
        Ok(host) => host,
        Err(e) => {
            log::error!("Failed to start inventory: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut host) {
        log::error!("Console I/O failed: {}", e);
    }
    host.shutdown();
}

/// Resolve and load the configuration
///
/// An explicitly named file must load. The implicit default file is only
/// used when present.
fn load_config() -> singularis_inventory::Result<InventoryConfig> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);

    match explicit {
        Some(path) => InventoryConfig::load_from_file(path),
        None if Path::new(DEFAULT_CONFIG).exists() => InventoryConfig::load_from_file(DEFAULT_CONFIG),
        None => {
            log::info!("No config file found, using defaults");
            Ok(InventoryConfig::default())
        }
    }
}

fn run(host: &mut Host) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Type 'help' for commands.")?;
    writeln!(stdout, "{}", host.render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "error: {}", e)?;
                continue;
            }
        };

        match host.execute(command) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue(message)) => {
                if let Some(message) = message {
                    writeln!(stdout, "{}", message)?;
                }
            }
            Err(e) => writeln!(stdout, "error: {}", e)?,
        }

        host.tick();
        writeln!(stdout, "{}", host.render())?;
        stdout.flush()?;
    }
    Ok(())
}
