use crate::foundation::math::approx_eq;

/// Largest breakpoint a measurement may produce; leaves scroll room for the merge phase.
pub const MAX_BREAKPOINT: f64 = 0.99;

/// Changes smaller than this are treated as the same layout.
pub const BREAKPOINT_TOLERANCE: f64 = 1e-6;

/// Pixel offsets reported by the host for one measurement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorGeometry {
    /// Document-space top of the scroll container.
    pub container_top: f64,
    /// Container scroll height minus the viewport height.
    pub scrollable_height: f64,
    /// Document-space top of the anchor element.
    pub anchor_top: f64,
}

/// Pull-based query into the host's rendered layout.
pub trait LayoutProbe {
    /// Current geometry, or `None` when the anchor is not rendered yet.
    fn probe(&self) -> Option<AnchorGeometry>;
}

/// Probe that reports a fixed geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticProbe(pub Option<AnchorGeometry>);

impl LayoutProbe for StaticProbe {
    fn probe(&self) -> Option<AnchorGeometry> {
        self.0
    }
}

impl<F> LayoutProbe for F
where
    F: Fn() -> Option<AnchorGeometry>,
{
    fn probe(&self) -> Option<AnchorGeometry> {
        self()
    }
}

/// Events after which the anchor may have moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutTrigger {
    Mount,
    Resize,
    /// An asynchronous asset (e.g. the anchor card's image) finished loading.
    AssetLoaded,
}

/// Normalize the anchor's offset inside the container to a scroll fraction.
///
/// Returns `None` when the container has no scrollable extent yet or any input is non-finite;
/// callers keep their previous breakpoint in that case.
pub fn measure_breakpoint(
    container_top: f64,
    scrollable_height: f64,
    anchor_top: f64,
) -> Option<f64> {
    if !(container_top.is_finite() && scrollable_height.is_finite() && anchor_top.is_finite()) {
        return None;
    }
    if scrollable_height <= 0.0 {
        return None;
    }
    let p = (anchor_top - container_top) / scrollable_height;
    if !p.is_finite() {
        return None;
    }
    Some(p.clamp(0.0, MAX_BREAKPOINT))
}

impl AnchorGeometry {
    pub fn breakpoint(&self) -> Option<f64> {
        measure_breakpoint(self.container_top, self.scrollable_height, self.anchor_top)
    }
}

/// Holds the live breakpoint: a static fallback until layout can be measured.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointTracker {
    fallback: f64,
    current: f64,
    measured: bool,
}

impl BreakpointTracker {
    pub fn new(fallback: f64) -> Self {
        let fallback = if fallback.is_finite() {
            fallback.clamp(0.0, MAX_BREAKPOINT)
        } else {
            0.0
        };
        Self {
            fallback,
            current: fallback,
            measured: false,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Whether the current value came from a measurement rather than the fallback.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Re-measure after `trigger`. Returns `true` when the breakpoint changed.
    ///
    /// The newest successful measurement overwrites the previous one. An unavailable or
    /// unmeasurable layout leaves the current value untouched.
    #[tracing::instrument(skip(self, probe), fields(previous = self.current))]
    pub fn remeasure(&mut self, trigger: LayoutTrigger, probe: &dyn LayoutProbe) -> bool {
        let Some(geometry) = probe.probe() else {
            tracing::trace!("anchor not rendered; keeping breakpoint");
            return false;
        };
        let Some(next) = geometry.breakpoint() else {
            tracing::trace!(
                scrollable_height = geometry.scrollable_height,
                "container not laid out; keeping breakpoint"
            );
            return false;
        };
        self.measured = true;
        if approx_eq(next, self.current, BREAKPOINT_TOLERANCE) {
            return false;
        }
        tracing::debug!(breakpoint = next, "breakpoint updated");
        self.current = next;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/probe.rs"]
mod tests;
