use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{ConfluenceError, ConfluenceResult};

/// Breakpoint used when no anchor event carries a position hint.
pub const DEFAULT_FALLBACK_BREAKPOINT: f64 = 0.62;

/// Which curve a content event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Primary,
    Secondary,
    Merge,
}

/// Horizontal placement hint for the event's card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub lane: Lane,
    #[serde(default)]
    pub side: Side,
    /// Scroll-weight hint in `[0, 1]`; doubles as the fallback breakpoint for the anchor.
    pub position: f64,
    /// Marks the meeting event whose card is measured for the live breakpoint.
    #[serde(default)]
    pub anchor: bool,
}

impl ContentEvent {
    /// Spacer height (in viewport-height units) placed above this event's card.
    pub fn lead_spacing_vh(&self) -> u32 {
        lead_spacing_vh(self.position)
    }
}

/// `max(10, round(position * 120))`, so early events still get some breathing room.
pub fn lead_spacing_vh(position: f64) -> u32 {
    let vh = (position.clamp(0.0, 1.0) * 120.0).round() as u32;
    vh.max(10)
}

/// Ordered list of events supplied by the host page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContentFeed {
    pub events: Vec<ContentEvent>,
}

impl ContentFeed {
    pub fn new(events: Vec<ContentEvent>) -> ConfluenceResult<Self> {
        let feed = Self { events };
        feed.validate()?;
        Ok(feed)
    }

    pub fn from_json_str(s: &str) -> ConfluenceResult<Self> {
        let feed: Self = serde_json::from_str(s)?;
        feed.validate()?;
        Ok(feed)
    }

    pub fn from_path(path: &Path) -> ConfluenceResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read content feed '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> ConfluenceResult<()> {
        let mut seen = BTreeSet::new();
        for e in &self.events {
            if e.id.is_empty() {
                return Err(ConfluenceError::validation("event id must not be empty"));
            }
            if !seen.insert(e.id.as_str()) {
                return Err(ConfluenceError::validation(format!(
                    "duplicate event id '{}'",
                    e.id
                )));
            }
            if !(e.position.is_finite() && (0.0..=1.0).contains(&e.position)) {
                return Err(ConfluenceError::validation(format!(
                    "event '{}' position must be in [0, 1]",
                    e.id
                )));
            }
        }
        Ok(())
    }

    /// The designated meeting event.
    ///
    /// An explicit `anchor` flag wins; otherwise the first event titled like a first date.
    pub fn anchor_event(&self) -> Option<&ContentEvent> {
        self.events.iter().find(|e| e.anchor).or_else(|| {
            self.events
                .iter()
                .find(|e| e.title.to_lowercase().contains("first date"))
        })
    }

    pub fn fallback_breakpoint(&self, default: f64) -> f64 {
        self.anchor_event().map_or(default, |e| e.position)
    }

    pub fn in_lane(&self, lane: Lane) -> impl Iterator<Item = &ContentEvent> {
        self.events.iter().filter(move |e| e.lane == lane)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/feed.rs"]
mod tests;
