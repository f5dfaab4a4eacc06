//! questlog reset command
//!
//! Two-step reset: without `--yes` nothing is touched and the command asks
//! for confirmation; with `--yes` the whole document is replaced with the
//! default empty one.

use crate::error::Result;
use crate::goal::Engine;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::session::Session;

pub struct Options {
    pub engine: Engine,
    pub yes: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ResetReport {
    reset: bool,
    saved: bool,
}

pub fn run(opts: Options) -> Result<()> {
    let mut session = Session::new();

    if !opts.yes {
        session.request_reset();

        let report = ResetReport {
            reset: false,
            saved: true,
        };

        let mut human = HumanOutput::new("Reset not confirmed; nothing was changed");
        human.push_next_step("questlog reset --yes");

        emit_success(
            OutputOptions {
                json: opts.json,
                quiet: opts.quiet,
            },
            "reset",
            &report,
            Some(&human),
        )?;
        return Ok(());
    }

    session.request_reset();
    let mutation = opts.engine.reset();
    session.resolve_reset();

    let report = ResetReport {
        reset: true,
        saved: mutation.save_error.is_none(),
    };

    let mut human = HumanOutput::new("Goal and all missions cleared");
    if let Some(warning) = mutation.warning() {
        human.push_warning(warning);
    }
    human.push_next_step("questlog goal set \"<your goal>\"");

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "reset",
        &report,
        Some(&human),
    )?;

    Ok(())
}
