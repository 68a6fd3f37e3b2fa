//! `quire paths`: list template search directories.

use quire_theme::ThemeRegistry;

use crate::project::{display_relative, open_site, Site};
use crate::GlobalArgs;

/// Runs the `quire paths` command.
///
/// Prints every indexed search directory, highest precedence first, relative
/// to the project directory where possible. Returns exit code 0.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let site = open_site(global)?;

    if !global.quiet {
        match site.loader.registry().find_active_theme() {
            Some(theme) => eprintln!("      Theme {}", theme.name),
            None => eprintln!("      Theme (none)"),
        }
    }

    for line in render(&site) {
        println!("{line}");
    }
    Ok(0)
}

/// Formats the search directories, one per line.
fn render(site: &Site) -> Vec<String> {
    site.loader
        .search_directories()
        .into_iter()
        .map(|dir| display_relative(dir, &site.project_dir))
        .collect()
}
