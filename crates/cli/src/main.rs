mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use greedytri::geom::rand::ReplayToken;
use greedytri::prelude::Vec2;
use greedytri::{CanvasCfg, Change, PointSet, Size};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Greedy non-crossing edge selection over point-set files")]
struct Cmd {
    /// Vertex radius: drawable-area inset and half the hit-square side
    #[arg(long, global = true, default_value_t = 6.0)]
    radius: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct CanvasArgs {
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

impl CanvasArgs {
    fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Write a random point set to a file
    Generate {
        #[arg(long)]
        count: usize,
        /// Replay seed; defaults to the current time
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: String,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Load a point set, select edges and optionally write a JSON report
    Triangulate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        json: Option<String>,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Add a point to a saved set
    Add {
        #[arg(long)]
        file: String,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Remove the first point whose hit square contains (x, y)
    Remove {
        #[arg(long)]
        file: String,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Move point number `index` (1-based) to (x, y)
    Move {
        #[arg(long)]
        file: String,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = CanvasCfg {
        vertex_radius: cmd.radius,
    };
    match cmd.action {
        Action::Generate {
            count,
            seed,
            out,
            canvas,
        } => generate(cfg, canvas.size(), count, seed, out),
        Action::Triangulate {
            input,
            json,
            canvas,
        } => triangulate(cfg, canvas.size(), input, json),
        Action::Add { file, x, y, canvas } => edit(cfg, canvas.size(), &file, |ps| {
            ps.add_point(Vec2::new(x, y))
        })
        .map(drop),
        Action::Remove { file, x, y, canvas } => edit(cfg, canvas.size(), &file, |ps| {
            ps.remove_point(Vec2::new(x, y))
        })
        .map(drop),
        Action::Move {
            file,
            index,
            x,
            y,
            canvas,
        } => edit(cfg, canvas.size(), &file, |ps| match index.checked_sub(1) {
            Some(i) => ps.move_point(i, Vec2::new(x, y)),
            None => Change::Unchanged,
        })
        .map(drop),
    }
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn open(cfg: CanvasCfg, size: Size, file: &str) -> Result<PointSet> {
    let mut ps = PointSet::with_canvas(cfg, size);
    let _ = ps
        .load_from(file)
        .with_context(|| format!("loading {file}"))?;
    Ok(ps)
}

fn log_edges(ps: &PointSet) {
    let edges = ps.edges();
    tracing::info!(
        points = ps.points().len(),
        candidates = edges.len(),
        accepted = edges.accepted_count(),
        rejected = edges.rejected_count(),
        "edges"
    );
}

fn generate(cfg: CanvasCfg, size: Size, count: usize, seed: Option<u64>, out: String) -> Result<()> {
    let seed = seed.unwrap_or_else(time_seed);
    tracing::info!(count, seed, out, "generate");
    let mut ps = PointSet::with_canvas(cfg, size);
    let mut rng = ReplayToken::new(seed).to_std_rng();
    let _ = ps.generate(count, &mut rng);
    log_edges(&ps);
    ps.save_to(&out).with_context(|| format!("saving {out}"))?;
    Ok(())
}

fn triangulate(cfg: CanvasCfg, size: Size, input: String, json: Option<String>) -> Result<()> {
    tracing::info!(input, json = ?json, "triangulate");
    let ps = open(cfg, size, &input)?;
    log_edges(&ps);
    if let Some(out) = json {
        report::write_report(&out, &report::Report::new(&input, &ps))?;
        tracing::info!(out, "report written");
    }
    Ok(())
}

/// Load `file`, apply `op` and write the file back only if `op` changed the
/// set.
fn edit(
    cfg: CanvasCfg,
    size: Size,
    file: &str,
    op: impl FnOnce(&mut PointSet) -> Change,
) -> Result<Change> {
    let mut ps = open(cfg, size, file)?;
    let change = op(&mut ps);
    match change {
        Change::Changed => {
            log_edges(&ps);
            ps.save_to(file).with_context(|| format!("saving {file}"))?;
        }
        Change::Unchanged => tracing::info!(file, "edit rejected; file left untouched"),
    }
    Ok(change)
}
