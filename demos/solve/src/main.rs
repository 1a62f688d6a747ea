//! `solve`: place musicians on a stage for one problem file.
//!
//! ```text
//! solve problem.json out.json [--svg out.svg] [--csv out.csv]
//!       [--upgrade old.json] [--profile full|lightning] [--seconds N]
//!       [--seed N] [-v]
//! ```
//!
//! Without `--upgrade` the optimizer runs for the profile's budget (or
//! `--seconds`).  With `--upgrade` the previous solution's positions are kept
//! and only volumes are recomputed; a lower score is an error.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sp_core::{Solution, WallClockDeadline};
use sp_output::{CsvWriter, JsonWriter, SolutionWriter, SvgWriter};
use sp_problem::{Problem, load_problem_json, load_solution_json};
use sp_solver::{SearchPhase, SolveObserver, SolverBuilder, SolverConfig, upgrade_solution};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "solve")]
#[command(about = "Place musicians on a stage to maximize listener happiness")]
struct Cli {
    /// Problem JSON
    problem: PathBuf,

    /// Solution JSON to write
    output: PathBuf,

    /// Also write an SVG diagram
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Draw dislike lines in the SVG diagram
    #[arg(long, requires = "svg")]
    dislikes: bool,

    /// Also write placements as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Recompute volumes of an existing solution instead of searching
    #[arg(long)]
    upgrade: Option<PathBuf>,

    /// Tuning profile: full, lightning
    #[arg(long, default_value = "full")]
    profile: String,

    /// Override the profile's search budget
    #[arg(long)]
    seconds: Option<f64>,

    /// Seed the random generator for a repeatable run
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Prints each phase change and every improvement.
struct Progress {
    start:        Instant,
    improvements: u64,
}

impl SolveObserver for Progress {
    fn on_phase(&mut self, phase: SearchPhase) {
        if phase != SearchPhase::GroupSearch {
            println!("[{:>7.2}s] {phase}", self.start.elapsed().as_secs_f64());
        }
    }

    fn on_improvement(&mut self, round: u64, score: f64, moved: usize) {
        self.improvements += 1;
        println!(
            "[{:>7.2}s] round {round:>7}: sampled score {score:.0} ({moved} moved)",
            self.start.elapsed().as_secs_f64()
        );
    }

    fn on_solve_end(&mut self, solution: &Solution) {
        println!(
            "[{:>7.2}s] done: {} improvements, counters [{}]",
            self.start.elapsed().as_secs_f64(),
            self.improvements,
            solution.counters
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let problem = load_problem_json(&cli.problem)
        .with_context(|| format!("loading problem {}", cli.problem.display()))?;
    println!(
        "{}: {} musicians, {} listeners, {} pillars",
        cli.problem.display(),
        problem.musician_count(),
        problem.listeners().len(),
        problem.pillars().len()
    );

    let solution = match &cli.upgrade {
        Some(old) => {
            let previous = load_solution_json(old)
                .with_context(|| format!("loading solution {}", old.display()))?;
            upgrade_solution(&problem, previous)
                .with_context(|| format!("upgrading {}", old.display()))?
        }
        None => search(&cli, &problem)?,
    };

    println!("Score = {:.0}", solution.score);
    write_outputs(&cli, &problem, &solution)?;
    Ok(())
}

fn search(cli: &Cli, problem: &Problem) -> Result<Solution> {
    let Some(mut config) = SolverConfig::profile(&cli.profile) else {
        bail!("unknown profile {:?} (expected full or lightning)", cli.profile);
    };
    if let Some(seconds) = cli.seconds {
        if !(seconds.is_finite() && seconds >= 0.0) {
            bail!("--seconds must be a non-negative number, got {seconds}");
        }
        config.run_duration = Duration::from_secs_f64(seconds);
    }
    info!(profile = %cli.profile, budget_secs = config.run_duration.as_secs_f64(), "searching");

    let mut builder = SolverBuilder::new(config);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut solver = builder.build()?;

    let mut deadline = WallClockDeadline::new(solver.config().run_duration);
    let mut progress = Progress { start: Instant::now(), improvements: 0 };
    let solution = solver.solve_with(problem, &mut deadline, &mut progress)?;
    if solution.is_error() {
        eprintln!("warning: final layout failed verification");
    }
    Ok(solution)
}

fn write_outputs(cli: &Cli, problem: &Problem, solution: &Solution) -> Result<()> {
    type Output<'a> = (&'a Path, Box<dyn SolutionWriter>);

    let json: Box<dyn SolutionWriter> = Box::new(JsonWriter::create(&cli.output)?);
    let mut writers: Vec<Output<'_>> = vec![(cli.output.as_path(), json)];
    if let Some(path) = &cli.svg {
        let svg: Box<dyn SolutionWriter> =
            Box::new(SvgWriter::create(path)?.with_dislikes(cli.dislikes));
        writers.push((path.as_path(), svg));
    }
    if let Some(path) = &cli.csv {
        let csv: Box<dyn SolutionWriter> = Box::new(CsvWriter::create(path)?);
        writers.push((path.as_path(), csv));
    }

    for (path, writer) in &mut writers {
        writer
            .write_solution(problem, solution)
            .and_then(|()| writer.finish())
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
