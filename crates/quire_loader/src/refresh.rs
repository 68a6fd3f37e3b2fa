//! When a loader rebuilds its index.

use quire_common::{Lifecycle, SourceSet};

/// Whether a loader's index reflects the latest source set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshState {
    /// The index reflects an earlier source set, or was never built.
    Stale,
    /// The index was rebuilt for the latest source set.
    Current,
}

/// Decides when a loader should rebuild in response to the build lifecycle.
///
/// A loader starts [`Stale`](RefreshState::Stale). It rebuilds on
/// [`Lifecycle::BeforeRun`] when the run reports new sources, and ignores the
/// signal otherwise. Rebuilding while already current only repeats work.
#[derive(Clone, Copy, Debug)]
pub struct RefreshTrigger {
    state: RefreshState,
    refreshes: u64,
}

impl RefreshTrigger {
    /// The lifecycle points a refreshing loader subscribes to.
    pub const EVENTS: &'static [Lifecycle] = &[Lifecycle::BeforeRun];

    /// Creates a trigger in the stale state.
    pub fn new() -> Self {
        Self {
            state: RefreshState::Stale,
            refreshes: 0,
        }
    }

    /// Returns `true` if `event` with `sources` calls for a rebuild.
    pub fn should_refresh(&self, event: Lifecycle, sources: &SourceSet) -> bool {
        event == Lifecycle::BeforeRun && sources.has_new_sources()
    }

    /// Records a completed rebuild.
    pub fn mark_current(&mut self) {
        self.state = RefreshState::Current;
        self.refreshes += 1;
    }

    /// Records that the inputs changed and the index no longer matches them.
    pub fn mark_stale(&mut self) {
        self.state = RefreshState::Stale;
    }

    /// Returns the current state.
    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Returns how many rebuilds have completed.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }
}

impl Default for RefreshTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stale() {
        let trigger = RefreshTrigger::new();
        assert_eq!(trigger.state(), RefreshState::Stale);
        assert_eq!(trigger.refreshes(), 0);
    }

    #[test]
    fn refreshes_only_before_run_with_new_sources() {
        let trigger = RefreshTrigger::new();
        let mut sources = SourceSet::new();
        assert!(!trigger.should_refresh(Lifecycle::BeforeRun, &sources));

        sources.add_source("source/index.md");
        assert!(trigger.should_refresh(Lifecycle::BeforeRun, &sources));
        assert!(!trigger.should_refresh(Lifecycle::AfterRun, &sources));
    }

    #[test]
    fn state_transitions() {
        let mut trigger = RefreshTrigger::new();
        trigger.mark_current();
        trigger.mark_current();
        assert_eq!(trigger.state(), RefreshState::Current);
        assert_eq!(trigger.refreshes(), 2);

        trigger.mark_stale();
        assert_eq!(trigger.state(), RefreshState::Stale);
    }
}
