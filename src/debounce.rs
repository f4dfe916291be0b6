//! Debounce timer for fetch triggering
//!
//! Deadline-based rather than callback-based: scheduling records a deadline,
//! and the host's event loop polls `fire_if_elapsed` each tick. Arming a new
//! deadline always replaces the previous one, so no two timers ever coexist
//! and rapid edits coalesce into a single fire per quiet period.

use std::time::{Duration, Instant};

/// Coalesces rapid repeated triggers into a single deferred fire
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Arm the timer, replacing any previously armed deadline
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire once if the armed deadline has passed, disarming in the process
    pub fn fire_if_elapsed(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
