//! questlog status command

use crate::error::Result;
use crate::goal::{Engine, GOAL_TARGET};
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct Options {
    pub engine: Engine,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct StatusReport {
    goal: Option<String>,
    pending: usize,
    completed: usize,
    score: u32,
    target: u32,
    progress: f64,
}

pub fn run(opts: Options) -> Result<()> {
    let doc = opts.engine.load();
    let pending = doc.pending().count();
    let completed = doc.tasks.values().filter(|task| task.completed).count();

    let report = StatusReport {
        goal: doc.goal.clone(),
        pending,
        completed,
        score: doc.score(),
        target: GOAL_TARGET,
        progress: doc.progress(),
    };

    let header = match &doc.goal {
        Some(goal) => format!("Goal: {goal}"),
        None => "No goal set".to_string(),
    };

    let mut human = HumanOutput::new(header);
    human.push_summary("pending", pending.to_string());
    human.push_summary("completed", completed.to_string());
    human.push_summary(
        "progress",
        format!("{:.0}% ({}/{})", doc.progress() * 100.0, doc.score(), GOAL_TARGET),
    );
    if doc.goal.is_none() {
        human.push_next_step("questlog goal set \"<your goal>\"");
    }
    if pending == 0 {
        human.push_next_step("questlog task add <name> [--hardcore]");
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "status",
        &report,
        Some(&human),
    )?;

    Ok(())
}
