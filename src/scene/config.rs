use std::{f64::consts::FRAC_PI_2, path::Path};

use anyhow::Context as _;

use crate::{
    animation::shape::Taper,
    content::feed::DEFAULT_FALLBACK_BREAKPOINT,
    curve::{merge::MergeSpec, sampler::CurveSpec},
    foundation::core::{Rgba8, ViewportClass},
    foundation::error::{ConfluenceError, ConfluenceResult},
    timeline::controller::TimelineConfig,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Drawing-space extent. Base curves span `[0, meet_y]`, the merge curve continues below.
pub struct CanvasConfig {
    pub width: f64,
    pub meet_y: f64,
    pub merge_length: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            meet_y: 1800.0,
            merge_length: 1600.0,
        }
    }
}

impl CanvasConfig {
    pub fn total_height(&self) -> f64 {
        self.meet_y + self.merge_length
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Wave parameters for one base curve; centre and height come from the canvas.
pub struct BaseCurveConfig {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub taper: Taper,
    pub sample_count: u32,
}

impl Default for BaseCurveConfig {
    fn default() -> Self {
        Self {
            amplitude: 125.0,
            frequency: 2.5,
            phase: 0.0,
            taper: Taper::DownCubic,
            sample_count: 40,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: Rgba8,
    pub secondary: Rgba8,
    pub merge: Rgba8,
    pub grid: Rgba8,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: Rgba8::rgb(0x0d, 0x00, 0xff),
            secondary: Rgba8::rgb(0xcd, 0x28, 0xff),
            merge: Rgba8::rgb(0x03, 0x5e, 0x40),
            grid: Rgba8::rgb(0xe5, 0xe7, 0xeb),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Dot and caption drawn where the two stories meet.
pub struct MarkerConfig {
    pub radius: f64,
    pub label: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            label: "First date".to_string(),
        }
    }
}

/// Every tunable of a scene, enumerated once at composition time.
///
/// Can be built in code (`SceneConfig::default()` plus struct update) or loaded from JSON;
/// missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub canvas: CanvasConfig,
    /// Horizontal centre line of every curve, as a fraction of canvas width.
    pub center_x_pct: f64,
    /// Dashed vertical guides, as fractions of canvas width.
    pub guides: Vec<f64>,
    pub colors: ColorConfig,
    pub primary: BaseCurveConfig,
    pub secondary: BaseCurveConfig,
    pub merge: MergeSpec,
    /// Amplitude multiplier applied to every curve in the compact viewport class.
    pub compact_amplitude_scale: f64,
    pub stroke_width: f64,
    pub marker: MarkerConfig,
    pub timeline: TimelineConfig,
    /// Breakpoint used before layout can be measured and no feed anchor is known.
    pub fallback_breakpoint: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            center_x_pct: 0.28,
            guides: vec![0.28, 0.62],
            colors: ColorConfig::default(),
            primary: BaseCurveConfig::default(),
            secondary: BaseCurveConfig {
                amplitude: 150.0,
                frequency: 3.2,
                phase: FRAC_PI_2,
                ..BaseCurveConfig::default()
            },
            merge: MergeSpec::default(),
            compact_amplitude_scale: 0.6,
            stroke_width: 20.0,
            marker: MarkerConfig::default(),
            timeline: TimelineConfig::default(),
            fallback_breakpoint: DEFAULT_FALLBACK_BREAKPOINT,
        }
    }
}

/// One of the two independently generated curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseCurve {
    Primary,
    Secondary,
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> ConfluenceResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> ConfluenceResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> ConfluenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfluenceResult<()> {
        let c = &self.canvas;
        if !(c.width.is_finite() && c.width > 0.0) {
            return Err(ConfluenceError::validation("canvas width must be > 0"));
        }
        if !(c.meet_y.is_finite() && c.meet_y > 0.0) {
            return Err(ConfluenceError::validation("canvas meet_y must be > 0"));
        }
        if !(c.merge_length.is_finite() && c.merge_length >= 0.0) {
            return Err(ConfluenceError::validation(
                "canvas merge_length must be >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.center_x_pct) {
            return Err(ConfluenceError::validation(
                "center_x_pct must be in [0, 1]",
            ));
        }
        if self.guides.iter().any(|g| !(0.0..=1.0).contains(g)) {
            return Err(ConfluenceError::validation("guides must be in [0, 1]"));
        }
        if !(self.compact_amplitude_scale.is_finite() && self.compact_amplitude_scale >= 0.0) {
            return Err(ConfluenceError::validation(
                "compact_amplitude_scale must be >= 0",
            ));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfluenceError::validation("stroke_width must be > 0"));
        }
        if !(self.marker.radius.is_finite() && self.marker.radius >= 0.0) {
            return Err(ConfluenceError::validation("marker radius must be >= 0"));
        }
        if !self.fallback_breakpoint.is_finite() {
            return Err(ConfluenceError::validation(
                "fallback_breakpoint must be finite",
            ));
        }
        self.curve_spec(BaseCurve::Primary, ViewportClass::Regular)?;
        self.curve_spec(BaseCurve::Secondary, ViewportClass::Regular)?;
        self.merge.validate()?;
        self.timeline.validate()
    }

    pub fn center_x(&self) -> f64 {
        self.canvas.width * self.center_x_pct
    }

    pub fn amplitude_scale(&self, class: ViewportClass) -> f64 {
        match class {
            ViewportClass::Compact => self.compact_amplitude_scale,
            ViewportClass::Regular => 1.0,
        }
    }

    pub fn curve_spec(&self, which: BaseCurve, class: ViewportClass) -> ConfluenceResult<CurveSpec> {
        let base = match which {
            BaseCurve::Primary => &self.primary,
            BaseCurve::Secondary => &self.secondary,
        };
        CurveSpec::new(
            base.amplitude * self.amplitude_scale(class),
            base.frequency,
            base.phase,
            base.taper,
            base.sample_count,
            self.center_x(),
            self.canvas.meet_y,
        )
    }

    pub fn merge_spec(&self, class: ViewportClass) -> MergeSpec {
        MergeSpec {
            amplitude_base: self.merge.amplitude_base * self.amplitude_scale(class),
            ..self.merge.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
