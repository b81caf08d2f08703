//! 2D outlines built from point lists.
//!
//! A [`Path`] is stroked as a line loop, a [`Shape`] is filled. Both are
//! built the same way: the first point starts the outline, every following
//! point adds a straight segment, and a final segment always returns to the
//! start, even when the last point already coincides with it.

use glam::Vec2;
use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathAction {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Straight segment back to the most recent `MoveTo`.
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    actions: Vec<PathAction>,
    subpath_start: Option<Vec2>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: &[Vec2]) -> Self {
        let mut path = Self::new();
        path.extend_closed(points);
        path
    }

    fn extend_closed(&mut self, points: &[Vec2]) {
        for (index, point) in points.iter().enumerate() {
            if index == 0 {
                self.move_to(*point);
            } else {
                self.line_to(*point);
            }
        }
        self.close_path();
    }

    pub fn move_to(&mut self, point: Vec2) -> &mut Self {
        self.actions.push(PathAction::MoveTo(point));
        self.subpath_start = Some(point);
        self
    }

    /// Without a preceding `move_to` the segment starts at the origin.
    pub fn line_to(&mut self, point: Vec2) -> &mut Self {
        if self.subpath_start.is_none() {
            self.move_to(Vec2::ZERO);
        }
        self.actions.push(PathAction::LineTo(point));
        self
    }

    /// No-op on an empty path.
    pub fn close_path(&mut self) -> &mut Self {
        if self.subpath_start.is_some() {
            self.actions.push(PathAction::Close);
        }
        self
    }

    pub fn actions(&self) -> &[PathAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.actions.last(), Some(PathAction::Close))
    }

    /// Vertices in drawing order. A closed subpath ends with its start point repeated.
    pub fn points(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.actions.len());
        let mut start = Vec2::ZERO;

        for action in &self.actions {
            match *action {
                PathAction::MoveTo(point) => {
                    start = point;
                    points.push(point);
                }
                PathAction::LineTo(point) => points.push(point),
                PathAction::Close => points.push(start),
            }
        }

        points
    }

    /// Straight segments in drawing order, including the closing segment.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        let mut segments = Vec::new();
        let mut start = Vec2::ZERO;
        let mut current = Vec2::ZERO;

        for action in &self.actions {
            match *action {
                PathAction::MoveTo(point) => {
                    start = point;
                    current = point;
                }
                PathAction::LineTo(point) => {
                    segments.push((current, point));
                    current = point;
                }
                PathAction::Close => {
                    segments.push((current, start));
                    current = start;
                }
            }
        }

        segments
    }
}

/// Fillable outline with optional holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    outline: Path,
    holes: Vec<Path>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: &[Vec2]) -> Self {
        Self {
            outline: Path::from_points(points),
            holes: Vec::new(),
        }
    }

    pub fn outline(&self) -> &Path {
        &self.outline
    }

    pub fn outline_mut(&mut self) -> &mut Path {
        &mut self.outline
    }

    pub fn holes(&self) -> &[Path] {
        &self.holes
    }

    pub fn add_hole(&mut self, hole: Path) -> &mut Self {
        self.holes.push(hole);
        self
    }

    pub fn points(&self) -> Vec<Vec2> {
        self.outline.points()
    }

    /// Shoelace area of the outline; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        self.outline
            .points()
            .iter()
            .tuple_windows()
            .map(|(a, b)| a.perp_dot(*b))
            .sum::<f32>()
            * 0.5
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Even-odd test against the outline, excluding points inside any hole.
    pub fn contains_point(&self, point: Vec2) -> bool {
        crosses_odd(&self.outline, point) && !self.holes.iter().any(|hole| crosses_odd(hole, point))
    }
}

fn crosses_odd(path: &Path, point: Vec2) -> bool {
    path.segments()
        .into_iter()
        .filter(|(a, b)| {
            (a.y > point.y) != (b.y > point.y)
                && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        })
        .count()
        % 2
        == 1
}

/// Decodes interleaved `x, y` coordinates.
pub fn points_from_flat(coordinates: &[f32]) -> Result<Vec<Vec2>> {
    if coordinates.len() % 2 != 0 {
        log::warn!("rejecting point list with odd coordinate count {}", coordinates.len());
        return Err(Error::OddCoordinateCount {
            len: coordinates.len(),
        });
    }

    Ok(coordinates
        .chunks_exact(2)
        .map(|pair| Vec2::new(pair[0], pair[1]))
        .collect())
}

pub fn path_from_flat_points(coordinates: &[f32]) -> Result<Path> {
    Ok(Path::from_points(&points_from_flat(coordinates)?))
}

pub fn shape_from_flat_points(coordinates: &[f32]) -> Result<Shape> {
    Ok(Shape::from_points(&points_from_flat(coordinates)?))
}
