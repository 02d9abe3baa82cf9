use crate::foundation::{
    error::{ConfluenceError, ConfluenceResult},
    math::lerp,
};

/// Piecewise-linear map from a scalar input onto a derived animation value.
///
/// Inputs outside the domain clamp to the nearest boundary value; nothing is extrapolated.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "MappingStops")]
pub struct PiecewiseLinear {
    domain: Vec<f64>,   // sorted, non-decreasing
    codomain: Vec<f64>, // same length as domain
}

/// Unchecked wire form; converted through [`PiecewiseLinear::new`].
#[derive(serde::Deserialize)]
struct MappingStops {
    domain: Vec<f64>,
    codomain: Vec<f64>,
}

impl TryFrom<MappingStops> for PiecewiseLinear {
    type Error = ConfluenceError;

    fn try_from(raw: MappingStops) -> Result<Self, Self::Error> {
        Self::new(raw.domain, raw.codomain)
    }
}

impl PiecewiseLinear {
    pub fn new(domain: Vec<f64>, codomain: Vec<f64>) -> ConfluenceResult<Self> {
        let out = Self { domain, codomain };
        out.validate()?;
        Ok(out)
    }

    /// Two-stop mapping `[a, b] -> [c, d]`.
    pub fn linear(from: (f64, f64), to: (f64, f64)) -> ConfluenceResult<Self> {
        Self::new(vec![from.0, from.1], vec![to.0, to.1])
    }

    pub fn validate(&self) -> ConfluenceResult<()> {
        if self.domain.is_empty() {
            return Err(ConfluenceError::validation(
                "mapping must have at least one stop",
            ));
        }
        if self.domain.len() != self.codomain.len() {
            return Err(ConfluenceError::validation(
                "mapping domain and codomain lengths differ",
            ));
        }
        if !self
            .domain
            .iter()
            .chain(self.codomain.iter())
            .all(|v| v.is_finite())
        {
            return Err(ConfluenceError::validation("mapping stops must be finite"));
        }
        if !self.domain.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ConfluenceError::validation(
                "mapping domain must be sorted",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, x: f64) -> f64 {
        let idx = self.domain.partition_point(|&d| d <= x);

        if idx == 0 {
            return self.codomain[0];
        }
        if idx >= self.domain.len() {
            return self.codomain[self.codomain.len() - 1];
        }

        // domain[idx - 1] <= x < domain[idx], so the segment has positive width.
        let (a, b) = (self.domain[idx - 1], self.domain[idx]);
        lerp(self.codomain[idx - 1], self.codomain[idx], (x - a) / (b - a))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/mapping.rs"]
mod tests;
