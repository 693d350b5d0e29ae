// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

mod bundle;

use bundle::SolutionBundle;
use clap::Parser;
use quay_alloc_model::config::{ProblemLoader, SolverSettings};
use quay_alloc_model::problem::Problem;
use quay_alloc_model::solution::render_report;
use quay_alloc_model::example;
use quay_alloc_solver::prelude::SolverDriver;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "quay-alloc",
    about = "Berth allocation and quay crane assignment on CP-SAT"
)]
struct Args {
    /// Problem configuration JSON.
    #[arg(long, conflicts_with = "example")]
    config: Option<PathBuf>,

    /// Solve the built-in example instance instead of a config file.
    #[arg(long)]
    example: bool,

    /// Override the configured solver time limit.
    #[arg(long)]
    time_limit_seconds: Option<u64>,

    /// Write the solution bundle JSON to this path.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &Args) -> Result<(Problem, SolverSettings), Box<dyn std::error::Error>> {
    match &args.config {
        Some(path) => {
            let loaded = ProblemLoader::new().from_path(path)?;
            Ok(loaded.into_parts())
        }
        None => {
            let problem = example::default_problem()?;
            Ok((problem, SolverSettings::default()))
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let (problem, settings) = load(&args)?;
    let time_limit = args
        .time_limit_seconds
        .unwrap_or(settings.time_limit_seconds);

    tracing::info!(
        vessels = problem.vessels().len(),
        cranes = problem.cranes().len(),
        shifts = problem.num_shifts(),
        time_limit_s = time_limit,
        "problem loaded"
    );

    let solution = SolverDriver::new()
        .with_time_limit_seconds(time_limit)
        .solve(&problem);

    print!("{}", render_report(&problem, &solution));

    if let Some(path) = &args.output {
        let bundle = SolutionBundle::assemble(&problem, &solution);
        let mut file = File::create(path)?;
        serde_json::to_writer_pretty(&mut file, &bundle)?;
        file.write_all(b"\n")?;
        tracing::info!(path = %path.display(), "solution bundle written");
    }

    Ok(())
}

fn main() {
    enable_tracing();

    let args = Args::parse();
    if args.config.is_none() && !args.example {
        tracing::info!("no --config given; solving the built-in example instance");
    }

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
