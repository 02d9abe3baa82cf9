use crate::foundation::error::{ConfluenceError, ConfluenceResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Width below which the content column collapses to a single lane.
pub const COMPACT_MAX_WIDTH: f64 = 768.0;

/// Host viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ConfluenceResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfluenceError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConfluenceError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn class(self) -> ViewportClass {
        if self.width < COMPACT_MAX_WIDTH {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }
}

/// Coarse viewport bucket. Geometry is regenerated only when this changes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Compact,
    #[default]
    Regular,
}

/// Straight (non-premultiplied) RGBA8 colour, serialized as `#RRGGBB[AA]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn parse_hex(s: &str) -> ConfluenceResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ConfluenceError::validation(format!("colour '{s}' must start with '#'")))?;
        if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfluenceError::validation(format!(
                "colour '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parse = |i: usize| {
            byte(i).map_err(|e| ConfluenceError::validation(format!("colour '{s}': {e}")))
        };
        Ok(Self {
            r: parse(0)?,
            g: parse(2)?,
            b: parse(4)?,
            a: if hex.len() == 8 { parse(6)? } else { 255 },
        })
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Alpha as a unit fraction, for SVG `*-opacity` attributes.
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
