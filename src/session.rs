//! Session-scoped presentation state
//!
//! Short-lived flags that gate what the presentation layer shows: whether the
//! goal form should be offered, whether the goal celebration has already run,
//! and whether a reset is awaiting confirmation. Owned by the caller for the
//! lifetime of one interactive session; never persisted in the document.

/// Per-session UI flags, all false at session start
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    goal_set: bool,
    goal_celebrated: bool,
    reset_pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a goal was set in this session; the goal form is no
    /// longer offered.
    pub fn mark_goal_set(&mut self) {
        self.goal_set = true;
    }

    /// Whether the goal form should still be offered (no goal set in this
    /// session and no celebration shown).
    pub fn should_offer_goal_form(&self, current_goal: Option<&str>) -> bool {
        !self.goal_set && !self.goal_celebrated && current_goal.is_none()
    }

    /// Returns true the first time it is called after the goal is reached;
    /// the celebration runs once per session.
    pub fn celebrate_once(&mut self) -> bool {
        if self.goal_celebrated {
            return false;
        }
        self.goal_celebrated = true;
        true
    }

    /// Arm the reset confirmation
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Whether a reset is awaiting confirmation
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Resolve the pending reset, confirmed or not
    pub fn resolve_reset(&mut self) {
        self.reset_pending = false;
    }
}
