use std::f64::consts::PI;

use crate::{
    animation::shape::Taper,
    foundation::core::Point,
    foundation::error::{ConfluenceError, ConfluenceResult},
};

/// Upper bound on samples per curve; larger counts are rejected at construction.
pub const MAX_SAMPLES: u32 = 65_536;

/// Parameters of one tapered vertical sinusoid.
///
/// A spec is immutable once built and fully determines its sampled points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CurveSpec {
    amplitude: f64,
    frequency: f64,
    phase: f64, // radians
    taper: Taper,
    sample_count: u32,
    center_x: f64,
    height: f64,
}

impl CurveSpec {
    pub fn new(
        amplitude: f64,
        frequency: f64,
        phase: f64,
        taper: Taper,
        sample_count: u32,
        center_x: f64,
        height: f64,
    ) -> ConfluenceResult<Self> {
        if !(2..=MAX_SAMPLES).contains(&sample_count) {
            return Err(ConfluenceError::validation(format!(
                "CurveSpec sample_count must be in [2, {MAX_SAMPLES}] (got {sample_count})"
            )));
        }
        for (name, v) in [
            ("amplitude", amplitude),
            ("frequency", frequency),
            ("phase", phase),
            ("center_x", center_x),
            ("height", height),
        ] {
            if !v.is_finite() {
                return Err(ConfluenceError::validation(format!(
                    "CurveSpec {name} must be finite"
                )));
            }
        }
        if height <= 0.0 {
            return Err(ConfluenceError::validation("CurveSpec height must be > 0"));
        }
        Ok(Self {
            amplitude,
            frequency,
            phase,
            taper,
            sample_count,
            center_x,
            height,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn taper(&self) -> Taper {
        self.taper
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Sample `spec` into `sample_count + 1` points with strictly increasing `t`.
///
/// `y` advances linearly with `t`; `x` oscillates around `center_x`. Negative taper values are
/// clamped to zero so the wave never flips sign.
pub fn sample(spec: &CurveSpec) -> Vec<Point> {
    let n = spec.sample_count;
    let mut pts = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let t = f64::from(i) / f64::from(n);
        let y = t * spec.height;
        let taper = spec.taper.apply(t).max(0.0);
        let wave = (t * PI * spec.frequency + spec.phase).sin() * spec.amplitude * taper;
        pts.push(Point::new(spec.center_x + wave, y));
    }
    pts
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;
