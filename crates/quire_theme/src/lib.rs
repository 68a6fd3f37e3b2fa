//! Themes and the template search paths they contribute.
//!
//! A [`Theme`] is a root directory with an optional parent. The
//! [`ThemeRegistry`] hands out the active theme, and [`compose_paths`] turns it
//! into the ordered list of template directories a loader should index.

#![warn(missing_docs)]

pub mod compose;
pub mod registry;
pub mod theme;

pub use compose::{compose_paths, CONVENTIONAL_SUBDIRS};
pub use registry::{ConfigThemeRegistry, ThemeRegistry};
pub use theme::Theme;
