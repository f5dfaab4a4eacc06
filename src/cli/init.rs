//! questlog init command implementation
//!
//! Creates the initial config file and an empty store.

use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use crate::goal::{Document, Engine};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct Options {
    pub engine: Engine,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct InitReport {
    store: PathBuf,
    created: InitCreated,
}

#[derive(serde::Serialize)]
struct InitCreated {
    config: bool,
    store: bool,
}

pub fn run(opts: Options) -> Result<()> {
    let config_path = opts
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let created_config = if config_path.exists() {
        false
    } else {
        Config::default().save(&config_path)?;
        true
    };

    let store = opts.engine.store();
    let created_store = if store.exists() {
        false
    } else {
        store.save(&Document::default())?;
        true
    };

    let report = InitReport {
        store: store.path().to_path_buf(),
        created: InitCreated {
            config: created_config,
            store: created_store,
        },
    };

    let mut created_items = Vec::new();
    if created_config {
        created_items.push(config_path.display().to_string());
    }
    if created_store {
        created_items.push(store.path().display().to_string());
    }

    let header = if created_items.is_empty() {
        "questlog init: nothing to do".to_string()
    } else {
        "questlog init: initialized".to_string()
    };

    let mut human = HumanOutput::new(header);
    human.push_summary(
        "created",
        if created_items.is_empty() {
            "none".to_string()
        } else {
            created_items.join(", ")
        },
    );
    human.push_next_step("questlog goal set \"<your goal>\"");
    human.push_next_step("questlog task add <name> [--hardcore]");

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "init",
        &report,
        Some(&human),
    )?;

    Ok(())
}
