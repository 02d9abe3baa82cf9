/// Amplitude envelope applied along a curve's parameter `t`.
///
/// Base curves use a falling taper so they straighten toward their end; the merge curve uses a
/// rising one so it starts straight at the join.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taper {
    Constant,
    Down,
    #[default]
    DownCubic,
    Up,
    UpCubic,
}

impl Taper {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Constant => 1.0,
            Self::Down => 1.0 - t,
            Self::DownCubic => 1.0 - t * t * t,
            Self::Up => t,
            Self::UpCubic => t * t * t,
        }
    }
}

/// Monotonic growth curve for the merge curve's amplitude and frequency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ramp {
    #[default]
    Linear,
    Cubic,
}

impl Ramp {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Cubic => t * t * t,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;
