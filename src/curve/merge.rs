use std::f64::consts::PI;

use crate::{
    animation::shape::{Ramp, Taper},
    curve::{
        path::{PathDescriptor, to_smooth_spline},
        sampler::MAX_SAMPLES,
    },
    foundation::core::Point,
    foundation::error::{ConfluenceError, ConfluenceResult},
};

/// Fewer samples than this make the growing wave visibly faceted.
pub const MIN_MERGE_SAMPLES: u32 = 120;

/// Parameters for the curve that continues from a base curve's end.
///
/// Amplitude and frequency both grow with distance from the join, so the curve leaves the join
/// nearly straight and becomes wavier toward the bottom.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MergeSpec {
    pub amplitude_base: f64,
    pub frequency_base: f64,
    pub phase: f64,
    pub steps: u32,
    pub tension: f64,
    pub taper: Taper,
    pub amp_ramp: Ramp,
    pub freq_ramp: Ramp,
    /// Peak amplitude is `amplitude_base * (1 + amp_gain)`.
    pub amp_gain: f64,
    /// Peak frequency is `frequency_base * (1 + freq_gain)`.
    pub freq_gain: f64,
    /// Gap left between the curve's last point and the bottom of the drawing.
    pub bottom_margin: f64,
}

impl Default for MergeSpec {
    fn default() -> Self {
        Self {
            amplitude_base: 110.0,
            frequency_base: 4.5,
            phase: PI,
            steps: 180,
            tension: 0.55,
            taper: Taper::UpCubic,
            amp_ramp: Ramp::Cubic,
            freq_ramp: Ramp::Linear,
            amp_gain: 1.2,
            freq_gain: 1.6,
            bottom_margin: 20.0,
        }
    }
}

impl MergeSpec {
    pub fn validate(&self) -> ConfluenceResult<()> {
        for (name, v) in [
            ("amplitude_base", self.amplitude_base),
            ("frequency_base", self.frequency_base),
            ("phase", self.phase),
            ("tension", self.tension),
            ("amp_gain", self.amp_gain),
            ("freq_gain", self.freq_gain),
            ("bottom_margin", self.bottom_margin),
        ] {
            if !v.is_finite() {
                return Err(ConfluenceError::validation(format!(
                    "merge {name} must be finite"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.tension) {
            return Err(ConfluenceError::validation(
                "merge tension must be in [0, 1]",
            ));
        }
        if self.steps > MAX_SAMPLES {
            return Err(ConfluenceError::validation(format!(
                "merge steps must be <= {MAX_SAMPLES} (got {})",
                self.steps
            )));
        }
        Ok(())
    }
}

/// Merge path plus the join point it was pinned to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MergeCurve {
    pub join: Point,
    pub descriptor: PathDescriptor,
}

/// Build the merge curve starting exactly at `join` and ending `bottom_margin` above
/// `total_height`.
///
/// The first sample's `x` is pinned to `join.x`; every later `x` follows the wave around
/// `center_x`.
pub fn build_merge(
    join: Point,
    total_height: f64,
    center_x: f64,
    spec: &MergeSpec,
) -> ConfluenceResult<MergeCurve> {
    if !(join.x.is_finite() && join.y.is_finite()) {
        return Err(ConfluenceError::geometry("merge join point must be finite"));
    }
    if !(total_height.is_finite() && center_x.is_finite()) {
        return Err(ConfluenceError::geometry(
            "merge total_height and center_x must be finite",
        ));
    }
    spec.validate()?;

    let n = spec.steps.max(MIN_MERGE_SAMPLES);
    let y_end = total_height - spec.bottom_margin;
    let span = (y_end - join.y).max(1.0);

    let mut pts = Vec::with_capacity(n as usize + 1);
    pts.push(join);
    for i in 1..=n {
        let t = f64::from(i) / f64::from(n);
        let taper = spec.taper.apply(t).max(0.0);
        let amp = spec.amplitude_base * (1.0 + spec.amp_gain * spec.amp_ramp.apply(t));
        let freq = spec.frequency_base * (1.0 + spec.freq_gain * spec.freq_ramp.apply(t));
        let wave = (t * PI * freq + spec.phase).sin() * amp * taper;
        pts.push(Point::new(center_x + wave, join.y + t * span));
    }

    let descriptor = to_smooth_spline(&pts, spec.tension)?;
    Ok(MergeCurve { join, descriptor })
}

/// Build the merge curve from `base`'s terminal point once `base` exists.
///
/// Returns `Ok(None)` while the base geometry has not been produced yet; callers retry after
/// the base curve is sampled.
pub fn build_merge_after(
    base: Option<&PathDescriptor>,
    total_height: f64,
    center_x: f64,
    spec: &MergeSpec,
) -> ConfluenceResult<Option<MergeCurve>> {
    let Some(base) = base else {
        tracing::trace!("merge deferred: base curve not sampled yet");
        return Ok(None);
    };
    build_merge(base.terminal_point(), total_height, center_x, spec).map(Some)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/merge.rs"]
mod tests;
