use kurbo::{CubicBez, Line, ParamCurveArclen, PathSeg};

use crate::foundation::{
    core::{BezPath, Point},
    error::{ConfluenceError, ConfluenceResult},
};

const ARCLEN_ACCURACY: f64 = 1e-3;

/// One cubic Bézier segment; its start is the previous segment's `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Drawable path built from sampled points. Rebuilt rather than mutated when inputs change.
///
/// Always holds at least one point; only the serializers in this module construct it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathDescriptor {
    Polyline {
        points: Vec<Point>,
    },
    Spline {
        start: Point,
        segments: Vec<CubicSegment>,
    },
}

/// "Move to the first point, line to each subsequent point".
pub fn to_polyline(points: &[Point]) -> ConfluenceResult<PathDescriptor> {
    if points.is_empty() {
        return Err(ConfluenceError::validation("polyline needs at least one point"));
    }
    Ok(PathDescriptor::Polyline {
        points: points.to_vec(),
    })
}

/// Catmull-Rom spline through `points`, expressed as `n - 1` cubic Bézier segments.
///
/// Neighbours past either end are clamped to the end points. `tension` is clamped to `[0, 1]`;
/// `0` collapses the control points onto the chord.
pub fn to_smooth_spline(points: &[Point], tension: f64) -> ConfluenceResult<PathDescriptor> {
    let Some(&start) = points.first() else {
        return Err(ConfluenceError::validation("spline needs at least one point"));
    };
    let k = if tension.is_finite() {
        tension.clamp(0.0, 1.0) / 6.0
    } else {
        0.0
    };
    let last = points.len() - 1;
    let at = |i: isize| points[i.clamp(0, last as isize) as usize];

    let mut segments = Vec::with_capacity(last);
    for i in 0..last as isize {
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        segments.push(CubicSegment {
            c1: p1 + (p2 - p0) * k,
            c2: p2 - (p3 - p1) * k,
            to: p2,
        });
    }
    Ok(PathDescriptor::Spline { start, segments })
}

impl PathDescriptor {
    pub fn start_point(&self) -> Point {
        match self {
            Self::Polyline { points } => points[0],
            Self::Spline { start, .. } => *start,
        }
    }

    /// Final point reached when the whole path is drawn.
    pub fn terminal_point(&self) -> Point {
        match self {
            Self::Polyline { points } => points[points.len() - 1],
            Self::Spline { start, segments } => segments.last().map_or(*start, |s| s.to),
        }
    }

    pub fn segment_count(&self) -> usize {
        match self {
            Self::Polyline { points } => points.len() - 1,
            Self::Spline { segments, .. } => segments.len(),
        }
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start_point());
        match self {
            Self::Polyline { points } => {
                for &p in &points[1..] {
                    path.line_to(p);
                }
            }
            Self::Spline { segments, .. } => {
                for s in segments {
                    path.curve_to(s.c1, s.c2, s.to);
                }
            }
        }
        path
    }

    /// SVG `d` attribute for this path.
    pub fn svg_path_data(&self) -> String {
        self.to_bez_path().to_svg()
    }

    pub fn segments(&self) -> Vec<PathSeg> {
        let mut from = self.start_point();
        let mut out = Vec::with_capacity(self.segment_count());
        match self {
            Self::Polyline { points } => {
                for &p in &points[1..] {
                    out.push(PathSeg::Line(Line::new(from, p)));
                    from = p;
                }
            }
            Self::Spline { segments, .. } => {
                for s in segments {
                    out.push(PathSeg::Cubic(CubicBez::new(from, s.c1, s.c2, s.to)));
                    from = s.to;
                }
            }
        }
        out
    }

    /// Total drawn length, used to turn a draw fraction into a dash offset.
    pub fn arc_length(&self) -> f64 {
        self.segments()
            .iter()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/path.rs"]
mod tests;
