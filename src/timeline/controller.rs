use crate::{
    animation::mapping::PiecewiseLinear,
    foundation::error::{ConfluenceError, ConfluenceResult},
    foundation::math::{clamp01, remap_clamped},
};

/// Fixed boundaries of the scroll timeline. The breakpoint is supplied per evaluation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Scroll progress at which the merge curve is fully drawn.
    pub merge_end: f64,
    /// Content fades in over `[0, content_fade_end]` of raw progress.
    pub content_fade_end: f64,
    /// Meet marker fades in over this fraction of the merge draw.
    pub meet_fade: f64,
    /// Merge curve fades in over this fraction of the merge draw.
    pub merge_fade: f64,
    /// Smallest width kept between the breakpoint and `merge_end`.
    pub min_span: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            merge_end: 0.95,
            content_fade_end: 0.1,
            meet_fade: 0.1,
            merge_fade: 0.02,
            min_span: 1e-3,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> ConfluenceResult<()> {
        if !(self.min_span.is_finite() && self.min_span > 0.0 && self.min_span < 1.0) {
            return Err(ConfluenceError::validation(
                "timeline min_span must be in (0, 1)",
            ));
        }
        if !(self.merge_end.is_finite()
            && self.merge_end > self.min_span
            && self.merge_end <= 1.0)
        {
            return Err(ConfluenceError::validation(
                "timeline merge_end must be in (min_span, 1]",
            ));
        }
        for (name, v) in [
            ("content_fade_end", self.content_fade_end),
            ("meet_fade", self.meet_fade),
            ("merge_fade", self.merge_fade),
        ] {
            if !(v.is_finite() && v > 0.0 && v <= 1.0) {
                return Err(ConfluenceError::validation(format!(
                    "timeline {name} must be in (0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Animation values for one progress update, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct TimelineFrame {
    pub base_draw: f64,
    pub merge_draw: f64,
    pub meet_opacity: f64,
    pub merge_opacity: f64,
    pub content_opacity: f64,
}

/// Maps scroll progress and the live breakpoint to [`TimelineFrame`] values.
///
/// Cheap enough to run on every scroll tick; no geometry is touched.
#[derive(Clone, Debug)]
pub struct TimelineController {
    config: TimelineConfig,
    content_fade: PiecewiseLinear,
    meet_fade: PiecewiseLinear,
    merge_fade: PiecewiseLinear,
}

impl TimelineController {
    pub fn new(config: TimelineConfig) -> ConfluenceResult<Self> {
        config.validate()?;
        let content_fade = PiecewiseLinear::new(
            vec![0.0, config.content_fade_end, 1.0],
            vec![0.0, 1.0, 1.0],
        )?;
        let meet_fade = PiecewiseLinear::linear((0.0, config.meet_fade), (0.0, 1.0))?;
        let merge_fade = PiecewiseLinear::linear((0.0, config.merge_fade), (0.0, 1.0))?;
        Ok(Self {
            config,
            content_fade,
            meet_fade,
            merge_fade,
        })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Clamp a breakpoint so both remap domains keep positive width.
    pub fn effective_breakpoint(&self, breakpoint: f64) -> f64 {
        let upper = self.config.merge_end - self.config.min_span;
        if breakpoint.is_finite() {
            breakpoint.clamp(0.0, upper)
        } else {
            0.0
        }
    }

    pub fn evaluate(&self, progress: f64, breakpoint: f64) -> TimelineFrame {
        let p = if progress.is_finite() {
            clamp01(progress)
        } else {
            0.0
        };
        let b = self.effective_breakpoint(breakpoint);

        let base_draw = clamp01(remap_clamped(p, (0.0, b), (0.0, 1.0)));
        let merge_draw = clamp01(remap_clamped(p, (b, self.config.merge_end), (0.0, 1.0)));

        TimelineFrame {
            base_draw,
            merge_draw,
            meet_opacity: clamp01(self.meet_fade.sample(merge_draw)),
            merge_opacity: clamp01(self.merge_fade.sample(merge_draw)),
            content_opacity: clamp01(self.content_fade.sample(p)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/controller.rs"]
mod tests;
