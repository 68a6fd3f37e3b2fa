//! Build lifecycle events and the subscriber seam loaders hook into.
//!
//! The build runner owns a [`Dispatcher`], registers its subscribers for the
//! duration of a run, and fires [`Lifecycle`] points with the current
//! [`SourceSet`]. Subscribers declare the points they care about up front and
//! are only called for those.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A named point in a build run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Fired once per run after sources are discovered and before any are processed.
    BeforeRun,
    /// Fired once per run after every source has been processed.
    AfterRun,
}

/// The working set of sources for a build run.
///
/// Tracks every known source plus the ones that entered the set since the
/// last call to [`SourceSet::reset_new`].
#[derive(Debug, Default, Clone)]
pub struct SourceSet {
    sources: Vec<PathBuf>,
    known: HashSet<PathBuf>,
    new_sources: Vec<PathBuf>,
}

impl SourceSet {
    /// Creates an empty source set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source. Sources not seen before are also recorded as new.
    pub fn add_source(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.known.insert(path.clone()) {
            return;
        }
        self.new_sources.push(path.clone());
        self.sources.push(path);
    }

    /// Returns `true` if `path` is part of the working set.
    pub fn contains(&self, path: &Path) -> bool {
        self.known.contains(path)
    }

    /// Returns every source in insertion order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Returns the sources added since the last reset.
    pub fn new_sources(&self) -> &[PathBuf] {
        &self.new_sources
    }

    /// Returns `true` if any source entered the set since the last reset.
    pub fn has_new_sources(&self) -> bool {
        !self.new_sources.is_empty()
    }

    /// Marks every current source as seen.
    pub fn reset_new(&mut self) {
        self.new_sources.clear();
    }
}

/// Something that reacts to lifecycle points.
pub trait LifecycleSubscriber {
    /// The lifecycle points this subscriber wants to receive.
    fn subscribed_events(&self) -> &'static [Lifecycle];

    /// Handles one lifecycle point.
    fn on_event(&mut self, event: Lifecycle, sources: &SourceSet);
}

/// Fans lifecycle points out to the subscribers that declared them.
#[derive(Default)]
pub struct Dispatcher<'a> {
    subscribers: Vec<&'a mut dyn LifecycleSubscriber>,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a subscriber. Subscribers are notified in registration order.
    pub fn subscribe(&mut self, subscriber: &'a mut dyn LifecycleSubscriber) {
        self.subscribers.push(subscriber);
    }

    /// Fires `event` and returns how many subscribers handled it.
    pub fn dispatch(&mut self, event: Lifecycle, sources: &SourceSet) -> usize {
        let mut notified = 0;
        for subscriber in self.subscribers.iter_mut() {
            if subscriber.subscribed_events().contains(&event) {
                subscriber.on_event(event, sources);
                notified += 1;
            }
        }
        notified
    }
}
