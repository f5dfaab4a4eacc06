//! questlog goal commands

use crate::error::Result;
use crate::goal::Engine;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::session::Session;

pub struct SetOptions {
    pub engine: Engine,
    pub text: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct SetReport {
    goal: String,
    saved: bool,
}

pub fn run_set(opts: SetOptions) -> Result<()> {
    let mutation = opts.engine.set_goal(&opts.text);

    // The goal form is gated per session, not per store.
    let mut session = Session::new();
    session.mark_goal_set();

    let report = SetReport {
        goal: opts.text.clone(),
        saved: mutation.save_error.is_none(),
    };

    let mut human = HumanOutput::new(format!("Goal set: {}", opts.text));
    if let Some(warning) = mutation.warning() {
        human.push_warning(warning);
    }
    human.push_next_step("questlog task add <name> [--hardcore]");

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "goal set",
        &report,
        Some(&human),
    )?;

    Ok(())
}

pub struct ShowOptions {
    pub engine: Engine,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ShowReport {
    goal: Option<String>,
}

pub fn run_show(opts: ShowOptions) -> Result<()> {
    let doc = opts.engine.load();

    let report = ShowReport {
        goal: doc.goal.clone(),
    };

    let mut human = match &doc.goal {
        Some(goal) => HumanOutput::new(format!("Current goal: {goal}")),
        None => {
            let mut out = HumanOutput::new("No goal set");
            out.push_next_step("questlog goal set \"<your goal>\"");
            out
        }
    };
    human.push_summary("missions", doc.tasks.len().to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "goal show",
        &report,
        Some(&human),
    )?;

    Ok(())
}
