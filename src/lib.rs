//! Confluence generates two undulating curves that converge into one, and drives how much of
//! each is drawn from a single scroll-progress value.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `CurveSpec -> Vec<Point>` (tapered vertical sinusoids)
//! 2. **Serialize**: points -> `PathDescriptor` (polyline or Catmull-Rom Bézier spline)
//! 3. **Merge**: primary curve's terminal point -> `MergeCurve` continuing below it
//! 4. **Measure**: host layout -> breakpoint fraction (`BreakpointTracker`)
//! 5. **Animate**: `(progress, breakpoint) -> TimelineFrame` (draw fractions and opacities)
//!
//! [`TimelineEngine`] wires these together and reacts to scroll, layout and viewport events.
//! The [`preview`] module renders frames to SVG/PNG for offline inspection.
//!
//! Everything is single-threaded and deterministic: the same config, breakpoint and progress
//! always produce the same output.
#![forbid(unsafe_code)]

mod animation;
mod content;
mod curve;
mod foundation;
mod layout;
mod scene;
mod timeline;

/// Reference renderer producing SVG documents and PNG rasters.
pub mod preview;

pub use animation::mapping::PiecewiseLinear;
pub use animation::shape::{Ramp, Taper};
pub use content::feed::{
    ContentEvent, ContentFeed, DEFAULT_FALLBACK_BREAKPOINT, Lane, Side, lead_spacing_vh,
};
pub use curve::merge::{MIN_MERGE_SAMPLES, MergeCurve, MergeSpec, build_merge, build_merge_after};
pub use curve::path::{CubicSegment, PathDescriptor, to_polyline, to_smooth_spline};
pub use curve::sampler::{CurveSpec, MAX_SAMPLES, sample};
pub use foundation::core::{BezPath, COMPACT_MAX_WIDTH, Point, Rgba8, Vec2, Viewport, ViewportClass};
pub use foundation::error::{ConfluenceError, ConfluenceResult};
pub use foundation::math::{clamp01, remap_clamped};
pub use layout::probe::{
    AnchorGeometry, BREAKPOINT_TOLERANCE, BreakpointTracker, LayoutProbe, LayoutTrigger,
    MAX_BREAKPOINT, StaticProbe, measure_breakpoint,
};
pub use scene::config::{
    BaseCurve, BaseCurveConfig, CanvasConfig, ColorConfig, MarkerConfig, SceneConfig,
};
pub use scene::engine::{FrameOutput, TimelineEngine};
pub use scene::geometry::{GeometryCache, SceneGeometry};
pub use timeline::controller::{TimelineConfig, TimelineController, TimelineFrame};
