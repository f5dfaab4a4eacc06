//! questlog task commands

use crate::error::{Error, Result};
use crate::goal::{task_points, CompleteOutcome, Engine};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct AddOptions {
    pub engine: Engine,
    pub name: String,
    pub hardcore: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddReport {
    name: String,
    hardcore: bool,
    replaced: bool,
    saved: bool,
}

pub fn run_add(opts: AddOptions) -> Result<()> {
    if opts.name.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "mission name cannot be empty".to_string(),
        ));
    }

    let replaced = opts.engine.load().tasks.contains_key(&opts.name);
    let mutation = opts.engine.add_task(&opts.name, opts.hardcore);

    let report = AddReport {
        name: opts.name.clone(),
        hardcore: opts.hardcore,
        replaced,
        saved: mutation.save_error.is_none(),
    };

    let kind = if opts.hardcore { "hardcore mission" } else { "mission" };
    let mut human = HumanOutput::new(format!("Added {kind}: {}", opts.name));
    human.push_summary("worth", format!("{} points", task_points(opts.hardcore)));
    if replaced {
        human.push_warning(format!(
            "replaced existing mission '{}' and discarded its completion state",
            opts.name
        ));
    }
    if let Some(warning) = mutation.warning() {
        human.push_warning(warning);
    }
    human.push_next_step(format!("questlog task done \"{}\"", opts.name));

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "task add",
        &report,
        Some(&human),
    )?;

    Ok(())
}

pub struct DoneOptions {
    pub engine: Engine,
    pub name: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct DoneReport {
    name: String,
    #[serde(flatten)]
    outcome: CompleteOutcome,
    saved: bool,
}

pub fn run_done(opts: DoneOptions) -> Result<()> {
    let mutation = opts.engine.complete_task(&opts.name);

    let report = DoneReport {
        name: opts.name.clone(),
        outcome: mutation.value,
        saved: mutation.save_error.is_none(),
    };

    let mut human = match mutation.value {
        CompleteOutcome::Completed {
            hardcore,
            goal_reached,
        } => {
            let kind = if hardcore { "hardcore mission" } else { "mission" };
            let mut out = HumanOutput::new(format!(
                "Completed {kind}: {} (+{} points)",
                opts.name,
                task_points(hardcore)
            ));
            if goal_reached {
                out.push_detail("Congratulations! You reached your goal!".to_string());
            } else {
                out.push_next_step("questlog progress");
            }
            out
        }
        CompleteOutcome::AlreadyCompleted => {
            let mut out = HumanOutput::new(format!("Mission already completed: {}", opts.name));
            out.push_detail("nothing changed".to_string());
            out
        }
        CompleteOutcome::NotFound => {
            let mut out = HumanOutput::new(format!("No such mission: {}", opts.name));
            out.push_next_step("questlog task list");
            out.push_next_step(format!("questlog task add \"{}\"", opts.name));
            out
        }
    };
    if let Some(warning) = mutation.warning() {
        human.push_warning(warning);
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "task done",
        &report,
        Some(&human),
    )?;

    Ok(())
}

pub struct ListOptions {
    pub engine: Engine,
    pub completed: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct PendingEntry {
    name: String,
    hardcore: bool,
}

#[derive(serde::Serialize)]
struct CompletedEntry {
    name: String,
    time: String,
    hardcore: bool,
}

#[derive(serde::Serialize)]
#[serde(untagged)]
enum ListReport {
    Pending { pending: Vec<PendingEntry> },
    Completed { completed: Vec<CompletedEntry> },
}

pub fn run_list(opts: ListOptions) -> Result<()> {
    let doc = opts.engine.load();

    let (report, human) = if opts.completed {
        let entries: Vec<CompletedEntry> = doc
            .completed_tasks
            .iter()
            .map(|record| CompletedEntry {
                name: record.name.clone(),
                time: record.time.clone(),
                hardcore: record.hardcore,
            })
            .collect();

        let mut human = HumanOutput::new(format!("Completed missions: {}", entries.len()));
        for entry in &entries {
            let marker = if entry.hardcore { " (hardcore)" } else { "" };
            human.push_detail(format!("{}{} - {}", entry.name, marker, entry.time));
        }
        (ListReport::Completed { completed: entries }, human)
    } else {
        let entries: Vec<PendingEntry> = doc
            .pending()
            .map(|(name, task)| PendingEntry {
                name: name.clone(),
                hardcore: task.hardcore,
            })
            .collect();

        let mut human = HumanOutput::new(format!("Pending missions: {}", entries.len()));
        for entry in &entries {
            let marker = if entry.hardcore { " (hardcore)" } else { "" };
            human.push_detail(format!("{}{}", entry.name, marker));
        }
        if entries.is_empty() {
            human.push_next_step("questlog task add <name> [--hardcore]");
        }
        (ListReport::Pending { pending: entries }, human)
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "task list",
        &report,
        Some(&human),
    )?;

    Ok(())
}
