//! Bandaged Cube Explorer
//!
//! Maps the state space of bandaged 3x3x3 puzzles: which configurations can
//! be reached from a starting one by face turns, optionally treating
//! rotations and mirror images as the same configuration, and how far apart
//! the reachable configurations lie.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rayon::prelude::*;

use bandage::analysis::{self, Metric};
use bandage::{cubes, explore, export, symmetry, Cube};

/// Explores the state graphs of bandaged 3x3x3 puzzles.
#[derive(Parser)]
#[command(name = "bandage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explore every configuration reachable from a cube.
    Explore {
        /// Cube name, decimal id or 0x-prefixed hex id. Defaults to a small
        /// starter graph.
        id: Option<String>,
        /// Treat rotations and mirror images as the same configuration.
        #[arg(long)]
        ignore_orientation: bool,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the graph to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the canonical form of a cube.
    Canonical {
        id: String,
        /// Only consider rotations, not mirror images.
        #[arg(long)]
        no_mirror: bool,
    },
    /// Find the diameter and radius of the graphs containing some cubes.
    Analyze {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long, value_enum, default_value_t = MetricArg::Half)]
        metric: MetricArg,
    },
    /// List the named cubes.
    Names,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Quarter,
    Half,
}

impl From<MetricArg> for Metric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Quarter => Metric::Quarter,
            MetricArg::Half => Metric::Half,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Explore {
            id,
            ignore_orientation,
            format,
            output,
        } => run_explore(id.as_deref(), ignore_orientation, format, output),
        Command::Canonical { id, no_mirror } => run_canonical(&id, no_mirror),
        Command::Analyze { ids, metric } => run_analyze(&ids, metric.into()),
        Command::Names => {
            run_names();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Explores a cube and prints or saves the graph.
fn run_explore(
    id: Option<&str>,
    ignore_orientation: bool,
    format: Format,
    output: Option<PathBuf>,
) -> bandage::Result<()> {
    let cube = match id {
        Some(id) => cubes::parse_cube(id)?,
        None => {
            let starter = cubes::STARTERS[0];
            info!("no cube given, exploring starter {starter}");
            starter
        }
    };
    let graph = explore(cube, ignore_orientation);

    match output {
        Some(path) => {
            export::save(&graph, &path)?;
            println!(
                "Wrote {} nodes and {} edges to {}",
                graph.nodes.len(),
                graph.edges.len(),
                path.display()
            );
        }
        None => match format {
            Format::Text => print!("{}", export::format_graph(&graph)),
            Format::Json => println!("{}", export::to_json(&graph)?),
        },
    }
    Ok(())
}

/// Prints the canonical form of a cube.
fn run_canonical(id: &str, no_mirror: bool) -> bandage::Result<()> {
    let cube = cubes::parse_cube(id)?;
    let canonical = if no_mirror {
        symmetry::canonical_no_mirror(cube)
    } else {
        symmetry::canonical(cube)
    };
    println!("{canonical}");
    Ok(())
}

/// Analyzes each cube (in parallel) and prints one summary line per cube.
fn run_analyze(ids: &[String], metric: Metric) -> bandage::Result<()> {
    // reject bad input before doing any work
    let parsed: Vec<Cube> = ids
        .iter()
        .map(|id| cubes::parse_cube(id))
        .collect::<bandage::Result<_>>()?;

    let reports: Vec<(Cube, analysis::Stats)> = parsed
        .par_iter()
        .map(|&cube| (cube, analysis::analyze(cube, metric)))
        .collect();

    for (cube, stats) in reports {
        println!(
            "{cube} :: {} states, {} classes :: {} to {} in {}. center {} with radius {}",
            stats.states,
            stats.classes,
            stats.antipode_start,
            stats.antipode_end,
            stats.diameter,
            stats.center,
            stats.radius,
        );
    }
    Ok(())
}

/// Lists the named cubes and the starter ids.
fn run_names() {
    for (name, cube) in cubes::NAMED_CUBES {
        println!("{name:<12} {cube}");
    }
    println!();
    println!("Starters:");
    for cube in cubes::STARTERS {
        println!("  {cube}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_explore_flags() {
        let cli = Cli::parse_from(["bandage", "explore", "bridge", "--ignore-orientation"]);
        match cli.command {
            Command::Explore {
                id,
                ignore_orientation,
                output,
                ..
            } => {
                assert_eq!(id.as_deref(), Some("bridge"));
                assert!(ignore_orientation);
                assert!(output.is_none());
            }
            _ => panic!("expected explore"),
        }
    }

    #[test]
    fn test_bad_id_is_rejected_before_exploring() {
        assert!(run_explore(Some("not-a-cube"), false, Format::Text, None).is_err());
        assert!(run_analyze(&["bar".to_owned(), "-3".to_owned()], Metric::Half).is_err());
    }
}
