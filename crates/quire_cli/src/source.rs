//! `quire source`: print a resolved template.

use quire_loader::TemplateLoader;

use crate::project::open_site;
use crate::GlobalArgs;

/// Runs the `quire source` command.
///
/// Writes the template text to stdout. A name that does not resolve is
/// reported and yields exit code 1.
pub fn run(name: &str, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let site = open_site(global)?;
    match site.loader.source(name) {
        Ok(text) => {
            print!("{text}");
            Ok(0)
        }
        Err(err) if err.not_found().is_some() => {
            eprintln!("error: {err}");
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}
