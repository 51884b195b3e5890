//! Point-set files.
//!
//! Points are stored normalized to the canvas (`x / width`, `y / height`) so
//! a file loads into a canvas of any size. Segments are never stored.
//!
//! ## Format
//!
//! A gzip stream wrapping:
//!
//! ```text
//! magic    "GTRI"        4 bytes
//! version  u32 LE        4 bytes
//! count    u64 LE        8 bytes
//! points   count * (x: f64 LE, y: f64 LE)
//! ```
//!
//! Reading is all-or-nothing: any malformed input yields an error and no
//! points.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::geom::{Point, Size};

const MAGIC: &[u8; 4] = b"GTRI";
const VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("not a point-set file (bad magic)")]
    InvalidMagic,

    #[error("unsupported point-set version {0}")]
    UnsupportedVersion(u32),

    #[error("point-set file truncated: expected {expected} points")]
    Truncated { expected: u64 },

    #[error("non-finite coordinate in point {index}")]
    NonFinite { index: u64 },

    #[error("no canvas size to (de)normalize against")]
    NoCanvas,

    #[error("canvas {width} x {height} cannot (de)normalize points")]
    InvalidCanvas { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, PersistError>;

fn usable(size: Size) -> Result<Size> {
    if size.is_usable() {
        Ok(size)
    } else {
        Err(PersistError::InvalidCanvas {
            width: size.width,
            height: size.height,
        })
    }
}

fn check_finite(points: &[Point]) -> Result<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(PersistError::NonFinite {
            index: index as u64,
        }),
        None => Ok(()),
    }
}

/// Canvas coordinates → fractions of the canvas size.
pub fn normalize(points: &[Point], size: Size) -> Result<Vec<Point>> {
    let size = usable(size)?;
    Ok(points
        .iter()
        .map(|p| Point::new(p.x / size.width, p.y / size.height))
        .collect())
}

/// Fractions of the canvas size → canvas coordinates.
pub fn denormalize(points: &[Point], size: Size) -> Result<Vec<Point>> {
    let size = usable(size)?;
    Ok(points
        .iter()
        .map(|p| Point::new(p.x * size.width, p.y * size.height))
        .collect())
}

/// Write `points` as-is (callers normalize first) to a gzip stream on `w`.
/// Non-finite coordinates are refused before anything is written.
pub fn write_points<W: Write>(w: W, points: &[Point]) -> Result<()> {
    check_finite(points)?;
    let mut z = GzEncoder::new(w, Compression::default());
    z.write_all(MAGIC)?;
    z.write_all(&VERSION.to_le_bytes())?;
    z.write_all(&(points.len() as u64).to_le_bytes())?;
    for p in points {
        z.write_all(&p.x.to_le_bytes())?;
        z.write_all(&p.y.to_le_bytes())?;
    }
    z.finish()?.flush()?;
    Ok(())
}

/// Read points written by `write_points`.
pub fn read_points<R: Read>(r: R) -> Result<Vec<Point>> {
    let mut z = GzDecoder::new(r);

    let mut magic = [0u8; 4];
    z.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }
    let mut b4 = [0u8; 4];
    z.read_exact(&mut b4)?;
    let version = u32::from_le_bytes(b4);
    if version != VERSION {
        return Err(PersistError::UnsupportedVersion(version));
    }
    let mut b8 = [0u8; 8];
    z.read_exact(&mut b8)?;
    let count = u64::from_le_bytes(b8);

    // The header count is untrusted; grow as points actually arrive.
    let mut points = Vec::with_capacity(count.min(1 << 16) as usize);
    for index in 0..count {
        let x = read_f64(&mut z, count)?;
        let y = read_f64(&mut z, count)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(PersistError::NonFinite { index });
        }
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn read_f64<R: Read>(r: &mut R, expected: u64) -> Result<f64> {
    let mut b8 = [0u8; 8];
    r.read_exact(&mut b8).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PersistError::Truncated { expected },
        _ => PersistError::Io(e),
    })?;
    Ok(f64::from_le_bytes(b8))
}

/// Normalize `points` against `size` and write them to `path`.
///
/// The data is validated first and written to a sibling `.tmp` file that
/// replaces `path` only once complete, so a failed save never clobbers an
/// existing file.
pub fn save<P: AsRef<Path>>(path: P, points: &[Point], size: Size) -> Result<()> {
    let path = path.as_ref();
    let normalized = normalize(points, size)?;
    check_finite(&normalized)?;

    let mut tmp_name = path.file_name().map(OsString::from).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    let written = File::create(&tmp)
        .map_err(PersistError::from)
        .and_then(|file| write_points(BufWriter::new(file), &normalized))
        .and_then(|()| fs::rename(&tmp, path).map_err(PersistError::from));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written?;
    tracing::debug!(path = %path.display(), points = points.len(), "saved point set");
    Ok(())
}

/// Read `path` and scale its points to `size`.
pub fn load<P: AsRef<Path>>(path: P, size: Size) -> Result<Vec<Point>> {
    usable(size)?;
    let file = File::open(path.as_ref())?;
    let normalized = read_points(BufReader::new(file))?;
    tracing::debug!(path = %path.as_ref().display(), points = normalized.len(), "loaded point set");
    denormalize(&normalized, size)
}
