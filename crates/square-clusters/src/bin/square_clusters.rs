use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use square_clusters::io::load_grid;
use square_clusters::perf::{performance_test, PerfParams};
use square_clusters::pipeline::{analyze, run, RunConfig, RunReport};
use square_clusters::render::green;
use square_clusters::{ClusterSearchParams, ResolveMode};

use log::LevelFilter;
#[cfg(not(feature = "tracing"))]
use square_clusters::core::init_with_level;

#[cfg(feature = "tracing")]
use square_clusters::core::init_tracing;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[1;1H";
const MENU_MIN_SIZE: usize = 10;
const DEFAULT_MIN_SIZE: usize = 2;

#[derive(Parser, Debug)]
#[command(name = "square-clusters", version, about = "Find uniform square clusters in binary grids")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace). Ignored with the
    /// `tracing` feature, which reads `RUST_LOG`.
    #[arg(long, global = true, default_value = "info", value_parser = parse_level)]
    #[cfg_attr(feature = "tracing", allow(dead_code))]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level {s:?}"))
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random grid, find clusters and print them.
    Run(RunArgs),
    /// Find clusters in a grid read from a text file.
    Find(FindArgs),
    /// Time the pipeline over growing grid sizes.
    Perf(PerfArgs),
    /// Interactive menu.
    Menu,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Smallest cluster side to report [default: 2].
    #[arg(long)]
    min_size: Option<usize>,
    /// Report clusters of every size instead of only the largest.
    #[arg(long)]
    all: bool,
    /// Only remove clusters that fully contain another one.
    #[arg(long)]
    containment: bool,
}

impl SearchArgs {
    fn params(&self) -> ClusterSearchParams {
        ClusterSearchParams {
            min_size: self.min_size.unwrap_or(DEFAULT_MIN_SIZE),
            max_only: !self.all,
        }
    }

    fn mode(&self) -> ResolveMode {
        if self.containment {
            ResolveMode::Containment
        } else {
            ResolveMode::SizePriority
        }
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write the JSON report here.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Print the grid without ANSI colours.
    #[arg(long)]
    no_color: bool,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Grid side length.
    #[arg(required_unless_present = "config")]
    size: Option<usize>,
    /// Load run settings from a JSON config; flags given alongside override it.
    #[arg(long, conflicts_with = "size")]
    config: Option<PathBuf>,
    #[command(flatten)]
    search: SearchArgs,
    #[arg(long)]
    seed: Option<u64>,
    /// Relative weight of `0` cells [default: 0.2].
    #[arg(long)]
    zeros: Option<f64>,
    /// Relative weight of `1` cells [default: 0.8].
    #[arg(long)]
    ones: Option<f64>,
    #[command(flatten)]
    output: OutputArgs,
}

impl RunArgs {
    /// Base config (file or defaults) with every explicit flag applied.
    fn config(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match (&self.config, self.size) {
            (Some(path), _) => RunConfig::load_json(path)?,
            (None, Some(size)) => RunConfig {
                size,
                ..RunConfig::default()
            },
            (None, None) => return Err("grid size or --config is required".into()),
        };
        if let Some(min_size) = self.search.min_size {
            config.min_size = min_size;
        }
        if self.search.all {
            config.max_only = false;
        }
        if self.search.containment {
            config.mode = ResolveMode::Containment;
        }
        if let Some(zero) = self.zeros {
            config.weights.zero = zero;
        }
        if let Some(one) = self.ones {
            config.weights.one = one;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct FindArgs {
    grid: PathBuf,
    #[command(flatten)]
    search: SearchArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct PerfArgs {
    /// Load harness settings from a JSON file; flags given alongside override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// [default: 15]
    #[arg(long)]
    cases: Option<usize>,
    /// [default: 3]
    #[arg(long)]
    runs: Option<usize>,
    /// [default: 10]
    #[arg(long)]
    start_size: Option<usize>,
    /// [default: 10]
    #[arg(long)]
    increment: Option<usize>,
    /// [default: 3]
    #[arg(long)]
    min_size: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Write the JSON results here.
    #[arg(long)]
    json: Option<PathBuf>,
}

impl PerfArgs {
    fn params(&self) -> Result<PerfParams, Box<dyn Error>> {
        let mut params = match &self.config {
            Some(path) => PerfParams::load_json(path)?,
            None => PerfParams::default(),
        };
        let overrides = [
            (self.cases, &mut params.cases),
            (self.runs, &mut params.runs),
            (self.start_size, &mut params.start_size),
            (self.increment, &mut params.increment),
            (self.min_size, &mut params.min_size),
        ];
        for (flag, field) in overrides {
            if let Some(v) = flag {
                *field = v;
            }
        }
        Ok(params)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    init_with_level(cli.log_level).map_err(|e| e.to_string())?;

    #[cfg(feature = "tracing")]
    init_tracing(false);

    match cli.command {
        Command::Run(args) => cmd_run(args),
        Command::Find(args) => cmd_find(args),
        Command::Perf(args) => cmd_perf(args),
        Command::Menu => {
            let stdin = io::stdin();
            menu(&mut stdin.lock(), &mut io::stdout())
        }
    }
}

fn cmd_run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let report = run(&args.config()?)?;
    emit(&report, &args.output)
}

fn cmd_find(args: FindArgs) -> Result<(), Box<dyn Error>> {
    let grid = load_grid(&args.grid)?;
    let report = analyze(grid, &args.search.params(), args.search.mode())?;
    emit(&report, &args.output)
}

fn cmd_perf(args: PerfArgs) -> Result<(), Box<dyn Error>> {
    let report = performance_test(&args.params()?, args.seed)?;
    if let Some(path) = &args.json {
        report.write_json(path)?;
    }
    let table = report.format_table();
    let mut lines = table.lines();
    if let Some(header) = lines.next() {
        println!("{}", green(header));
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn emit(report: &RunReport, output: &OutputArgs) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &output.json {
        report.write_json(path)?;
    }
    let mut rng = match report.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    println!("{}", report.render(&mut rng, !output.no_color));
    Ok(())
}

/// Read one trimmed line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), Box<dyn Error>> {
    loop {
        let Some(choice) = prompt(input, out, "1 -> Run\n2 -> Performance Test\n3 -> Quit\nChoice: ")?
        else {
            return Ok(());
        };
        let Ok(choice) = choice.parse::<u32>() else {
            continue;
        };
        if !(1..=3).contains(&choice) {
            continue;
        }
        write!(out, "{CLEAR_SCREEN}")?;

        match choice {
            1 => {
                if let Some(config) = menu_run_config(input, out)? {
                    writeln!(out)?;
                    writeln!(out, "Clusters are {}", green("fun"))?;
                    let report = run(&config)?;
                    let mut rng = StdRng::from_entropy();
                    writeln!(out, "{}", report.render(&mut rng, true))?;
                }
            }
            2 => {
                let report = performance_test(&PerfParams::default(), None)?;
                write!(out, "{CLEAR_SCREEN}")?;
                writeln!(out, "{}", report.format_table())?;
            }
            _ => return Ok(()),
        }
        writeln!(out)?;
    }
}

/// Ask for the run settings; `None` when an answer is invalid.
fn menu_run_config<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<RunConfig>> {
    let text = format!("Matrix size (min={MENU_MIN_SIZE}): ");
    let Some(size) = prompt(input, out, &text)?.and_then(|s| s.parse::<usize>().ok()) else {
        return Ok(None);
    };
    if size < MENU_MIN_SIZE {
        return Ok(None);
    }

    let text = format!("Minimum cluster size (min=2, max={size}): ");
    let Some(min_size) = prompt(input, out, &text)?.and_then(|s| s.parse::<usize>().ok()) else {
        return Ok(None);
    };
    if !(2..=size).contains(&min_size) {
        return Ok(None);
    }

    let all = prompt(input, out, "All clusters (y/N)? ")?.unwrap_or_default();
    let overlap = prompt(input, out, "Overlap (y/N)? ")?.unwrap_or_default();

    Ok(Some(RunConfig {
        size,
        min_size,
        max_only: !all.eq_ignore_ascii_case("y"),
        mode: if overlap.eq_ignore_ascii_case("y") {
            ResolveMode::Containment
        } else {
            ResolveMode::SizePriority
        },
        ..RunConfig::default()
    }))
}
