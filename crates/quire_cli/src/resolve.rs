//! `quire resolve`: show which file each logical name maps to.

use quire_loader::TemplateLoader;
use serde_json::{json, Value};

use crate::project::{display_relative, open_site, Site};
use crate::{GlobalArgs, ReportFormat, ResolveArgs};

/// The outcome of resolving one name.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Found {
        actual_name: String,
        directory: String,
        cache_key: String,
    },
    Missing {
        message: String,
    },
}

/// Runs the `quire resolve` command.
///
/// Returns exit code 0 if every name resolved, 1 otherwise.
pub fn run(args: &ResolveArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let site = open_site(global)?;
    let outcomes = resolve_all(&site, &args.names)?;

    match args.format {
        ReportFormat::Text => {
            for (name, outcome) in args.names.iter().zip(&outcomes) {
                match outcome {
                    Outcome::Found {
                        actual_name,
                        directory,
                        cache_key,
                    } => println!("{name} -> {directory}/{actual_name} [{cache_key}]"),
                    Outcome::Missing { message } => eprintln!("error: {message}"),
                }
            }
            if !global.quiet && outcomes.iter().any(|o| matches!(o, Outcome::Missing { .. })) {
                eprintln!(
                    "note: tried extensions {:?}",
                    site.config.site.extensions
                );
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(&args.names, &outcomes))?);
        }
    }

    let missing = outcomes
        .iter()
        .any(|o| matches!(o, Outcome::Missing { .. }));
    Ok(if missing { 1 } else { 0 })
}

/// Resolves every name. Only read failures on resolved files are errors.
fn resolve_all(site: &Site, names: &[String]) -> Result<Vec<Outcome>, Box<dyn std::error::Error>> {
    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let outcome = match site.loader.resolve(name) {
            Ok(resolved) => Outcome::Found {
                cache_key: site.loader.cache_key(name)?,
                directory: display_relative(resolved.directory.root(), &site.project_dir),
                actual_name: resolved.actual_name,
            },
            Err(err) => Outcome::Missing {
                message: err.to_string(),
            },
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn to_json(names: &[String], outcomes: &[Outcome]) -> Value {
    let entries: Vec<Value> = names
        .iter()
        .zip(outcomes)
        .map(|(name, outcome)| match outcome {
            Outcome::Found {
                actual_name,
                directory,
                cache_key,
            } => json!({
                "name": name,
                "actual_name": actual_name,
                "directory": directory,
                "cache_key": cache_key,
            }),
            Outcome::Missing { message } => json!({
                "name": name,
                "error": message,
            }),
        })
        .collect();
    Value::Array(entries)
}
