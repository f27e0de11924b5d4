use anyhow::{bail, Context, Result};
use chanhull::api::{
    circle_with_interior, compute_hull_baseline, compute_hull_fast, search_counterexample,
    uniform_grid, CircleCfg, GridCfg, Hull, SearchCfg,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod bench;
mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: baseline scan vs Chan's algorithm")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Baseline,
    Fast,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Uniform,
    Circle,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of an x,y point file and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Fast)]
        algo: Algo,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a random point set (CSV or Parquet by extension)
    Generate {
        #[arg(long, value_enum, default_value_t = Kind::Uniform)]
        kind: Kind,
        #[arg(long, default_value_t = 100)]
        count: usize,
        /// Points on the circle (circle kind only)
        #[arg(long, default_value_t = 12)]
        rim: usize,
        /// Coordinate bound (grid) or radius (circle)
        #[arg(long, default_value_t = 32_767)]
        max_coord: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Search random grid sets for a disagreement between the two algorithms
    Validate {
        #[arg(long, default_value_t = 10_000)]
        size: usize,
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long, default_value_t = 30_276)]
        max_coord: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Where to write the offending point set, if any
        #[arg(long)]
        dump: Option<PathBuf>,
    },
    /// Time both algorithms over the standard workloads and write a CSV table
    Bench {
        #[arg(long, default_value_t = 10_000)]
        max_size: usize,
        #[arg(long, default_value_t = 3)]
        repeats: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, algo, out } => hull(&input, algo, &out),
        Action::Generate {
            kind,
            count,
            rim,
            max_coord,
            seed,
            out,
        } => generate(kind, count, rim, max_coord, seed, &out),
        Action::Validate {
            size,
            trials,
            max_coord,
            seed,
            dump,
        } => validate(
            SearchCfg {
                size,
                trials,
                max_coord,
                seed,
            },
            dump.as_deref(),
        ),
        Action::Bench {
            max_size,
            repeats,
            seed,
            out,
        } => bench(max_size, repeats, seed, &out),
        Action::Report => report(),
    }
}

#[derive(Debug, Serialize)]
struct HullDoc {
    algo: &'static str,
    input_points: usize,
    hull: Vec<[f64; 2]>,
    area: f64,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::Baseline => "baseline",
            Algo::Fast => "fast",
        }
    }
}

fn hull_doc(algo: Algo, input_points: usize, hull: &Hull) -> HullDoc {
    HullDoc {
        algo: algo.name(),
        input_points,
        hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
        area: hull.area(),
    }
}

fn hull(input: &Path, algo: Algo, out: &Path) -> Result<()> {
    let points = io::read_points(input)?;
    tracing::info!(input = %input.display(), algo = algo.name(), points = points.len(), "hull");
    let hull = match algo {
        Algo::Baseline => compute_hull_baseline(&points),
        Algo::Fast => compute_hull_fast(&points)?,
    };
    tracing::info!(vertices = hull.len(), area = hull.area(), "hull done");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let doc = hull_doc(algo, points.len(), &hull);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(json!({ "algo": algo.name() })).with_input(input);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn generate(
    kind: Kind,
    count: usize,
    rim: usize,
    max_coord: u32,
    seed: u64,
    out: &Path,
) -> Result<()> {
    tracing::info!(?kind, count, rim, max_coord, seed, out = %out.display(), "generate");
    let points = match kind {
        Kind::Uniform => uniform_grid(
            GridCfg {
                count,
                max_x: max_coord,
                max_y: max_coord,
            },
            seed,
        )?,
        Kind::Circle => circle_with_interior(
            CircleCfg {
                rim,
                total: count,
                radius: f64::from(max_coord),
            },
            seed,
        )?,
    };
    io::write_points(out, &points)?;
    tracing::info!(points = points.len(), "generate done");
    Ok(())
}

fn validate(cfg: SearchCfg, dump: Option<&Path>) -> Result<()> {
    tracing::info!(
        size = cfg.size,
        trials = cfg.trials,
        max_coord = cfg.max_coord,
        seed = cfg.seed,
        "validate"
    );
    match search_counterexample(cfg)? {
        None => {
            tracing::info!(trials = cfg.trials, "no counterexample");
            Ok(())
        }
        Some(points) => {
            if let Some(path) = dump {
                io::write_points(path, &points)?;
                tracing::info!(path = %path.display(), "counterexample written");
            }
            bail!("counterexample found ({} points)", points.len())
        }
    }
}

fn bench(max_size: usize, repeats: usize, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(max_size, repeats, seed, out = %out.display(), "bench");
    let rows = bench::run_sweep(max_size, repeats, seed)?;
    let mut df = bench::to_frame(&rows)?;
    io::write_frame(out, &mut df)?;
    let payload = provenance::Payload::new(json!({
        "max_size": max_size,
        "repeats": repeats,
        "seed": seed,
    }));
    provenance::write_sidecar(out, payload)?;
    if rows.iter().any(|r| !r.agrees) {
        bail!("fast hull disagreed with the baseline; see {}", out.display());
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::summary(json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
