//! Shared foundational types used across the Quire template stack.
//!
//! This crate provides content hashing for template cache keys and the build
//! lifecycle events that loaders subscribe to.

#![warn(missing_docs)]

pub mod hash;
pub mod lifecycle;

pub use hash::ContentHash;
pub use lifecycle::{Dispatcher, Lifecycle, LifecycleSubscriber, SourceSet};
