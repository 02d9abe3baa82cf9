use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{ConfluenceError, ConfluenceResult};

/// Guard against pathological allocations from oversized scale factors.
const MAX_DIM: u32 = 16_384;

/// Rasterized preview frame (premultiplied RGBA8, row-major).
#[derive(Clone, Debug)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Rasterize an SVG document at `scale` device pixels per user unit.
pub fn rasterize_svg(svg: &str, scale: f32) -> ConfluenceResult<RasterFrame> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(ConfluenceError::validation("raster scale must be > 0"));
    }

    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse preview svg")?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(ConfluenceError::validation(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ConfluenceError::geometry("failed to allocate preview pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(RasterFrame {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

impl RasterFrame {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> ConfluenceResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
}

#[cfg(test)]
#[path = "../../tests/unit/preview/raster.rs"]
mod tests;
