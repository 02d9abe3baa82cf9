use crate::{
    content::feed::ContentFeed,
    curve::{merge::MergeCurve, path::PathDescriptor},
    foundation::core::Viewport,
    foundation::error::ConfluenceResult,
    layout::probe::{BreakpointTracker, LayoutProbe, LayoutTrigger},
    scene::{
        config::SceneConfig,
        geometry::{GeometryCache, SceneGeometry},
    },
    timeline::controller::{TimelineController, TimelineFrame},
};

/// Everything handed to the renderer for one update.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct FrameOutput<'a> {
    pub primary: &'a PathDescriptor,
    pub secondary: &'a PathDescriptor,
    pub merge: Option<&'a MergeCurve>,
    pub values: TimelineFrame,
    /// Breakpoint the values were computed against, after clamping.
    pub breakpoint: f64,
}

/// Composition root: wires geometry, layout measurement and the timeline together.
///
/// Three trigger classes drive it:
/// - [`TimelineEngine::on_progress`] on every scroll update (timeline math only),
/// - [`TimelineEngine::on_layout`] after mount, resize or asset load (re-measure),
/// - [`TimelineEngine::on_viewport`] + [`TimelineEngine::flush_geometry`] for viewport changes.
#[derive(Clone, Debug)]
pub struct TimelineEngine {
    config: SceneConfig,
    controller: TimelineController,
    breakpoint: BreakpointTracker,
    geometry: GeometryCache,
}

impl TimelineEngine {
    pub fn new(config: SceneConfig, viewport: Viewport) -> ConfluenceResult<Self> {
        let fallback = config.fallback_breakpoint;
        Self::with_fallback(config, viewport, fallback)
    }

    /// Like [`TimelineEngine::new`], but seeds the breakpoint from the feed's anchor event.
    pub fn with_feed(
        config: SceneConfig,
        feed: &ContentFeed,
        viewport: Viewport,
    ) -> ConfluenceResult<Self> {
        let fallback = feed.fallback_breakpoint(config.fallback_breakpoint);
        Self::with_fallback(config, viewport, fallback)
    }

    fn with_fallback(
        config: SceneConfig,
        viewport: Viewport,
        fallback: f64,
    ) -> ConfluenceResult<Self> {
        config.validate()?;
        let controller = TimelineController::new(config.timeline.clone())?;
        let geometry = GeometryCache::new(&config, viewport.class())?;
        Ok(Self {
            config,
            controller,
            breakpoint: BreakpointTracker::new(fallback),
            geometry,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn geometry(&self) -> &SceneGeometry {
        self.geometry.geometry()
    }

    pub fn geometry_rebuilds(&self) -> u64 {
        self.geometry.rebuilds()
    }

    pub fn breakpoint(&self) -> f64 {
        self.breakpoint.current()
    }

    pub fn breakpoint_tracker(&self) -> &BreakpointTracker {
        &self.breakpoint
    }

    /// Map a scroll progress update to renderer output. Never resamples curves.
    pub fn on_progress(&self, progress: f64) -> FrameOutput<'_> {
        let geometry = self.geometry.geometry();
        let raw = self.breakpoint.current();
        FrameOutput {
            primary: &geometry.primary,
            secondary: &geometry.secondary,
            merge: geometry.merge.as_ref(),
            values: self.controller.evaluate(progress, raw),
            breakpoint: self.controller.effective_breakpoint(raw),
        }
    }

    /// Re-measure the breakpoint after a layout-affecting event.
    pub fn on_layout(&mut self, trigger: LayoutTrigger, probe: &dyn LayoutProbe) -> bool {
        self.breakpoint.remeasure(trigger, probe)
    }

    /// Note a viewport size change; geometry is rebuilt on the next flush.
    pub fn on_viewport(&mut self, viewport: Viewport) {
        self.geometry.request(viewport);
    }

    /// Rebuild geometry if the viewport class changed since the last flush.
    pub fn flush_geometry(&mut self) -> ConfluenceResult<bool> {
        self.geometry.flush(&self.config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/engine.rs"]
mod tests;
