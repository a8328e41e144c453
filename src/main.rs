use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use strokefit::{FitConfig, Vec3};

#[derive(Parser)]
#[command(name = "strokefit", about = "Fit cubic beziers to a sampled 3D polyline")]
struct Cli {
    /// Input JSON file: an array of [x, y, z] points (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum allowed deviation, in input units
    #[arg(short, long, default_value = "1.0")]
    error: f64,

    /// Newton-Raphson rounds per segment before splitting
    #[arg(long, default_value = "4")]
    max_iterations: usize,

    /// Fit split halves in parallel
    #[arg(long)]
    parallel: bool,

    /// Drop consecutive duplicate points before fitting
    #[arg(long)]
    dedup: bool,

    /// Write SVG path data (x/y projection) instead of JSON
    #[arg(long)]
    svg: bool,

    /// Print a deviation report to stderr
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = FitConfig {
        tolerance: cli.error,
        max_iterations: cli.max_iterations,
        parallel: cli.parallel,
    };

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let mut points: Vec<Vec3> = serde_json::from_str(&raw)?;

    if cli.dedup {
        let before = points.len();
        points = strokefit::prepare::dedup_consecutive(&points);
        if points.len() != before {
            eprintln!("  Dedup       {} \u{2192} {} points", before, points.len());
        }
    }

    let result = strokefit::fit_curve_with(&points, &config)?;
    eprintln!(
        "  Fit         {} points \u{2192} {} segments  (error {})",
        points.len(),
        result.segments.len(),
        config.tolerance
    );

    if cli.report {
        eprint!("{}", strokefit::eval::evaluate(&points, &result));
    }

    let body = if cli.svg {
        result.to_bezpath().to_svg()
    } else {
        serde_json::to_string_pretty(&result)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, body + "\n")?;
            eprintln!("  \u{2713} {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", body)?;
        }
    }

    Ok(())
}
