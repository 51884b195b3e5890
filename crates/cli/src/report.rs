use anyhow::{Context, Result};
use greedytri::{PointSet, Segment};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::Command;

/// One segment as written to the JSON report (1-based point numbers).
#[derive(Debug, Serialize)]
pub struct SegmentOut {
    pub a: usize,
    pub b: usize,
    pub length: u64,
}

impl From<&Segment> for SegmentOut {
    fn from(s: &Segment) -> Self {
        Self {
            a: s.a.0 + 1,
            b: s.b.0 + 1,
            length: s.length,
        }
    }
}

/// Snapshot of a point set and its selected edges.
#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub input: String,
    pub canvas: Option<[f64; 2]>,
    pub points: Vec<[f64; 2]>,
    pub accepted: Vec<SegmentOut>,
    pub rejected: Vec<SegmentOut>,
}

impl Report {
    pub fn new(input: &str, ps: &PointSet) -> Self {
        let edges = ps.edges();
        Self {
            code_rev: code_rev(),
            input: input.to_string(),
            canvas: ps.canvas().map(|s| [s.width, s.height]),
            points: ps.points().iter().map(|p| [p.x, p.y]).collect(),
            accepted: edges.accepted().map(SegmentOut::from).collect(),
            rejected: edges.rejected().map(SegmentOut::from).collect(),
        }
    }
}

/// Write `report` as pretty JSON to `out`, creating parent directories.
pub fn write_report<P: AsRef<Path>>(out: P, report: &Report) -> Result<()> {
    let out = out.as_ref();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

/// Revision stamped into reports: `GIT_COMMIT` at run time, then at build
/// time, then `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_owned))
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}
