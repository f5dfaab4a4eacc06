//! questlog progress command
//!
//! The original progress gauge: percentage toward the target, the active
//! goal, and a once-per-session celebration when the goal is reached.

use crate::error::Result;
use crate::goal::{Engine, GOAL_TARGET};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::session::Session;

pub struct Options {
    pub engine: Engine,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ProgressReport {
    goal: Option<String>,
    score: u32,
    target: u32,
    progress: f64,
    goal_reached: bool,
}

pub fn run(opts: Options) -> Result<()> {
    let doc = opts.engine.load();
    let progress = doc.progress();
    let goal_reached = doc.goal_reached();

    let report = ProgressReport {
        goal: doc.goal.clone(),
        score: doc.score(),
        target: GOAL_TARGET,
        progress,
        goal_reached,
    };

    let mut human = HumanOutput::new(format!("Progress: {:.0}%", progress * 100.0));
    human.push_summary("score", format!("{}/{}", doc.score(), GOAL_TARGET));
    human.push_summary("bar", render_bar(progress));
    if let Some(goal) = &doc.goal {
        human.push_summary("goal", goal.clone());
    }

    let mut session = Session::new();
    if goal_reached && session.celebrate_once() {
        human.push_detail("Congratulations! You reached your goal!".to_string());
    }
    if session.should_offer_goal_form(doc.goal.as_deref()) {
        human.push_next_step("questlog goal set \"<your goal>\"");
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "progress",
        &report,
        Some(&human),
    )?;

    Ok(())
}

fn render_bar(progress: f64) -> String {
    const WIDTH: usize = 20;
    let filled = (progress * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::render_bar;

    #[test]
    fn bar_spans_empty_to_full() {
        assert_eq!(render_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(render_bar(1.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(render_bar(0.5), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }
}
