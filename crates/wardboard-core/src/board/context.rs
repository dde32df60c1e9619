//! Ambient session context.
//!
//! The UI shell's session-wide state (the "current time" it renders against,
//! the sidebar collapse flag) is carried as an explicit context object
//! injected at session construction, never as a module-level singleton.

use chrono::{DateTime, Utc};

/// Time source for the session.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Wall clock
    System,
    /// Pinned instant, for deterministic tests
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}

/// Per-session ambient state, created at the app root and living for the
/// whole session.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub clock: Clock,
    pub sidebar_collapsed: bool,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            clock: Clock::System,
            sidebar_collapsed: false,
        }
    }
}

impl SessionContext {
    /// Context pinned to a fixed instant (tests and previews).
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self {
            clock: Clock::Fixed(instant),
            sidebar_collapsed: false,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
