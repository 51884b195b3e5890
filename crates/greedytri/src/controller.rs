//! Live point set: the single place where points are mutated.
//!
//! Every successful mutation reruns the full build + select pipeline and
//! reports `Change::Changed`; rejected mutations (out of the drawable area,
//! no point hit, unknown index) leave everything untouched and report
//! `Change::Unchanged`. Callers re-query `points()` / `edges()` after a change.

use std::path::Path;

use rand::Rng;

use crate::edges::{triangulate, EdgeSet};
use crate::geom::rand::draw_points;
use crate::geom::{CanvasCfg, Point, Rect, Size};
use crate::persist::{self, PersistError};

/// Outcome of a mutating operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Change {
    Changed,
    Unchanged,
}

impl Change {
    #[inline]
    pub fn is_changed(self) -> bool {
        matches!(self, Change::Changed)
    }
}

/// Point set plus its derived edge set.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    cfg: CanvasCfg,
    canvas: Option<Size>,
    /// Last usable canvas size the point coordinates are laid out for.
    layout: Option<Size>,
    points: Vec<Point>,
    edges: EdgeSet,
    unsaved: bool,
}

impl PointSet {
    pub fn new(cfg: CanvasCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    /// Point set bound to a canvas of the given size.
    pub fn with_canvas(cfg: CanvasCfg, canvas: Size) -> Self {
        Self {
            cfg,
            canvas: Some(canvas),
            layout: Some(canvas).filter(Size::is_usable),
            ..Self::default()
        }
    }

    #[inline]
    pub fn cfg(&self) -> CanvasCfg {
        self.cfg
    }

    #[inline]
    pub fn canvas(&self) -> Option<Size> {
        self.canvas
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// True when the set changed since the last `load`, `clear` or
    /// `mark_saved`.
    #[inline]
    pub fn is_unsaved(&self) -> bool {
        self.unsaved
    }

    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    /// Drawable area: the canvas shrunk by the vertex radius. Empty when no
    /// canvas size is known.
    pub fn inset_rect(&self) -> Rect {
        match self.canvas {
            Some(size) => size.rect().inset(self.cfg.vertex_radius),
            None => Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    fn hit_rect(&self, p: Point) -> Rect {
        Rect::centered(p, self.cfg.vertex_radius)
    }

    /// Index of the first point whose hit square contains `location`.
    pub fn hit_test(&self, location: Point) -> Option<usize> {
        self.points
            .iter()
            .position(|&p| self.hit_rect(p).contains(location))
    }

    fn rebuild(&mut self) {
        self.edges = triangulate(&self.points);
        tracing::debug!(
            points = self.points.len(),
            candidates = self.edges.len(),
            accepted = self.edges.accepted_count(),
            "rebuilt edges"
        );
    }

    fn commit(&mut self) -> Change {
        self.rebuild();
        self.unsaved = true;
        Change::Changed
    }

    /// Replace all points with `count` uniform points inside the inset
    /// rectangle.
    pub fn generate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Change {
        self.points = draw_points(count, self.inset_rect(), rng);
        self.commit()
    }

    /// Append a point; rejected outside the inset rectangle.
    pub fn add_point(&mut self, location: Point) -> Change {
        if !self.inset_rect().contains(location) {
            tracing::debug!(?location, "add_point outside drawable area");
            return Change::Unchanged;
        }
        self.points.push(location);
        self.commit()
    }

    /// Remove the first point hit by `location`; no-op when nothing is hit.
    pub fn remove_point(&mut self, location: Point) -> Change {
        let Some(idx) = self.hit_test(location) else {
            tracing::debug!(?location, "remove_point hit nothing");
            return Change::Unchanged;
        };
        self.points.remove(idx);
        self.commit()
    }

    /// Relocate point `index`; rejected for unknown indices or locations
    /// outside the inset rectangle.
    pub fn move_point(&mut self, index: usize, location: Point) -> Change {
        if index >= self.points.len() || !self.inset_rect().contains(location) {
            tracing::debug!(index, ?location, "move_point rejected");
            return Change::Unchanged;
        }
        self.points[index] = location;
        self.commit()
    }

    /// Record a new canvas size and stretch every point by the per-axis ratio
    /// to the last usable recorded size. Degenerate sizes (zero, negative,
    /// non-finite, as for a minimized window) are recorded but leave the
    /// points alone, so restoring afterwards scales from the size before.
    /// Without a previous usable size only the size is recorded.
    pub fn rescale(&mut self, new_size: Size) -> Change {
        self.canvas = Some(new_size);
        if !new_size.is_usable() {
            tracing::debug!(?new_size, "degenerate canvas; points kept");
            return Change::Unchanged;
        }
        let Some(old) = self.layout.replace(new_size) else {
            return Change::Unchanged;
        };
        if old == new_size {
            return Change::Unchanged;
        }
        let sx = new_size.width / old.width;
        let sy = new_size.height / old.height;
        for p in &mut self.points {
            p.x *= sx;
            p.y *= sy;
        }
        self.commit()
    }

    /// Drop all points and edges; the empty set counts as saved.
    pub fn clear(&mut self) -> Change {
        self.points.clear();
        self.edges = EdgeSet::default();
        self.unsaved = false;
        Change::Changed
    }

    /// Replace the point set (canvas coordinates) as freshly loaded content.
    pub fn load(&mut self, points: Vec<Point>) -> Change {
        self.points = points;
        self.rebuild();
        self.unsaved = false;
        Change::Changed
    }

    /// Load a persisted file, scaling its normalized points to the canvas.
    /// Leaves the set untouched on error.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<Change, PersistError> {
        let size = self.canvas.ok_or(PersistError::NoCanvas)?;
        let points = persist::load(path, size)?;
        Ok(self.load(points))
    }

    /// Save the current points normalized to the canvas and mark them saved.
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let size = self.canvas.ok_or(PersistError::NoCanvas)?;
        persist::save(path, &self.points, size)?;
        self.mark_saved();
        Ok(())
    }
}
