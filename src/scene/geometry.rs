use crate::{
    curve::{
        merge::{MergeCurve, build_merge_after},
        path::{PathDescriptor, to_polyline},
        sampler::sample,
    },
    foundation::core::{Viewport, ViewportClass},
    foundation::error::ConfluenceResult,
    scene::config::{BaseCurve, SceneConfig},
};

/// Curve geometry for one viewport class.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneGeometry {
    pub class: ViewportClass,
    pub primary: PathDescriptor,
    pub secondary: PathDescriptor,
    /// Present once the primary curve's terminal point is known.
    pub merge: Option<MergeCurve>,
}

impl SceneGeometry {
    /// Sample both base curves, then derive the merge curve from the primary's end.
    #[tracing::instrument(skip(config))]
    pub fn build(config: &SceneConfig, class: ViewportClass) -> ConfluenceResult<Self> {
        let primary = to_polyline(&sample(&config.curve_spec(BaseCurve::Primary, class)?))?;
        let secondary = to_polyline(&sample(&config.curve_spec(BaseCurve::Secondary, class)?))?;

        let merge = build_merge_after(
            Some(&primary),
            config.canvas.total_height(),
            config.center_x(),
            &config.merge_spec(class),
        )?;

        Ok(Self {
            class,
            primary,
            secondary,
            merge,
        })
    }
}

/// Geometry keyed on [`ViewportClass`], regenerated only when the class changes.
///
/// Resize events call [`GeometryCache::request`] as often as they like; the expensive rebuild
/// happens once, on the next [`GeometryCache::flush`].
#[derive(Clone, Debug)]
pub struct GeometryCache {
    current: SceneGeometry,
    pending: Option<ViewportClass>,
    rebuilds: u64,
}

impl GeometryCache {
    pub fn new(config: &SceneConfig, class: ViewportClass) -> ConfluenceResult<Self> {
        Ok(Self {
            current: SceneGeometry::build(config, class)?,
            pending: None,
            rebuilds: 1,
        })
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.current
    }

    pub fn class(&self) -> ViewportClass {
        self.current.class
    }

    /// Number of geometry builds so far, including the initial one.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the latest viewport; only its class is kept.
    pub fn request(&mut self, viewport: Viewport) {
        self.pending = Some(viewport.class());
    }

    /// Apply the last requested class. Returns `true` when geometry was rebuilt.
    pub fn flush(&mut self, config: &SceneConfig) -> ConfluenceResult<bool> {
        let Some(class) = self.pending.take() else {
            return Ok(false);
        };
        if class == self.current.class {
            return Ok(false);
        }
        tracing::debug!(?class, "viewport class changed; rebuilding geometry");
        self.current = SceneGeometry::build(config, class)?;
        self.rebuilds += 1;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/geometry.rs"]
mod tests;
