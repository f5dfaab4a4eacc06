//! Command-line interface for questlog
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use crate::goal::Engine;
use crate::storage::Store;

mod goal;
mod init;
mod progress;
mod reset;
mod status;
mod task;

/// questlog - goal and mission tracker
///
/// Track one goal and a set of missions. Completing missions earns points
/// (hardcore missions are worth 5, normal ones 1) toward a target of 50.
#[derive(Parser, Debug)]
#[command(name = "questlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (defaults to ./goal_data.json)
    #[arg(long, global = true, env = "QUESTLOG_STORE")]
    pub store: Option<PathBuf>,

    /// Path to the config file (defaults to ./.questlog.toml)
    #[arg(long, global = true, env = "QUESTLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize config and store in the current directory
    Init,

    /// Goal management
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Mission management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Show progress toward the goal
    Progress,

    /// Show goal, mission counts, and progress at a glance
    Status,

    /// Clear the goal and all missions
    Reset {
        /// Confirm the reset; without this nothing is touched
        #[arg(long)]
        yes: bool,
    },
}

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Set the active goal (overwrites any existing goal)
    Set {
        /// Goal description
        text: String,
    },

    /// Show the active goal
    Show,
}

/// Mission subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a mission (re-adding a name replaces the old mission)
    Add {
        /// Mission name
        name: String,

        /// Make this a hardcore mission (worth 5 points instead of 1)
        #[arg(long)]
        hardcore: bool,
    },

    /// Mark a mission completed
    Done {
        /// Mission name
        name: String,
    },

    /// List missions (pending by default)
    List {
        /// List completed missions with their completion times instead
        #[arg(long)]
        completed: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let engine = open_engine(self.store, self.config.as_deref())?;
        let json = self.json;
        let quiet = self.quiet;

        match self.command {
            Commands::Init => init::run(init::Options {
                engine,
                config: self.config,
                json,
                quiet,
            }),
            Commands::Goal(cmd) => match cmd {
                GoalCommands::Set { text } => goal::run_set(goal::SetOptions {
                    engine,
                    text,
                    json,
                    quiet,
                }),
                GoalCommands::Show => goal::run_show(goal::ShowOptions { engine, json, quiet }),
            },
            Commands::Task(cmd) => match cmd {
                TaskCommands::Add { name, hardcore } => task::run_add(task::AddOptions {
                    engine,
                    name,
                    hardcore,
                    json,
                    quiet,
                }),
                TaskCommands::Done { name } => task::run_done(task::DoneOptions {
                    engine,
                    name,
                    json,
                    quiet,
                }),
                TaskCommands::List { completed } => task::run_list(task::ListOptions {
                    engine,
                    completed,
                    json,
                    quiet,
                }),
            },
            Commands::Progress => progress::run(progress::Options { engine, json, quiet }),
            Commands::Status => status::run(status::Options { engine, json, quiet }),
            Commands::Reset { yes } => reset::run(reset::Options {
                engine,
                yes,
                json,
                quiet,
            }),
        }
    }
}

/// Resolve the store path (flag beats config, config beats default) and
/// build the engine around it.
fn open_engine(store: Option<PathBuf>, config: Option<&std::path::Path>) -> Result<Engine> {
    let path = match store {
        Some(path) => path,
        None => {
            let config_path = config
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            Config::load(&config_path)?.store.path
        }
    };
    Ok(Engine::new(Store::new(path)))
}
