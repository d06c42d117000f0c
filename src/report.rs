//! Search execution and output formatting.

use serde::Serialize;

use degrees_core::error::{DegreesError, GraphError};
use degrees_core::graph::bfs;

use crate::cli::{Cli, OutputFormat};
use crate::ingest::Database;

/// JSON envelope for a successful search.
#[derive(Debug, Serialize)]
struct PathReport {
    from: String,
    to: String,
    found: bool,
    degrees: usize,
    path: Vec<String>,
}

/// Load the database, run the search, and print the connection chain.
pub fn run(cli: &Cli) -> Result<(), DegreesError> {
    let mut db = Database::load(&cli.database)?;
    let source = db.resolve(&cli.name)?;
    let target = db.resolve(&cli.to)?;

    let handles = match bfs::shortest_path(&mut db.graph, source, target) {
        Ok(handles) => handles,
        Err(GraphError::Unreachable) => {
            return Err(DegreesError::NoConnection {
                from: cli.name.clone(),
                to: cli.to.clone(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::with_capacity(handles.len());
    for v in &handles {
        names.push(db.graph.vertex(*v)?.clone());
    }

    match cli.format {
        OutputFormat::Human => {
            for name in &names {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            let report = PathReport {
                from: cli.name.clone(),
                to: cli.to.clone(),
                found: true,
                // Every hop to the next person passes through a movie
                // vertex, so two path entries per degree.
                degrees: (names.len() - 1) / 2,
                path: names,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
