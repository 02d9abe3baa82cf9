use std::fmt::{self, Write as _};

use anyhow::Context as _;

use crate::{
    curve::path::PathDescriptor,
    foundation::core::Rgba8,
    foundation::error::ConfluenceResult,
    scene::{config::SceneConfig, engine::FrameOutput},
};

const LABEL_FILL: &str = "#6b7280";
const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_OFFSET: (f64, f64) = (16.0, 4.0);

/// Render one frame as a standalone SVG document.
///
/// Partial draws use a dash pattern sized to the path's arc length; paths with nothing drawn
/// are omitted.
pub fn render_svg(config: &SceneConfig, frame: &FrameOutput<'_>) -> ConfluenceResult<String> {
    let mut out = String::new();
    write_document(&mut out, config, frame).context("format preview svg")?;
    Ok(out)
}

fn write_document(
    out: &mut String,
    config: &SceneConfig,
    frame: &FrameOutput<'_>,
) -> fmt::Result {
    let w = config.canvas.width;
    let h = config.canvas.total_height();
    let v = frame.values;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(out, r##"  <rect width="{w}" height="{h}" fill="#ffffff"/>"##)?;

    for pct in &config.guides {
        let x = w * pct;
        writeln!(
            out,
            r#"  <line x1="{x}" x2="{x}" y1="0" y2="{h}" stroke="{}" stroke-dasharray="4 8"/>"#,
            rgb_hex(config.colors.grid)
        )?;
    }

    let stroke = config.stroke_width;
    push_stroked(out, frame.secondary, config.colors.secondary, stroke, v.base_draw, 1.0)?;
    push_stroked(out, frame.primary, config.colors.primary, stroke, v.base_draw, 1.0)?;

    if let Some(merge) = frame.merge {
        push_stroked(
            out,
            &merge.descriptor,
            config.colors.merge,
            stroke,
            v.merge_draw,
            v.merge_opacity,
        )?;

        if v.meet_opacity > 0.0 {
            let p = merge.join;
            writeln!(out, r#"  <g opacity="{:.4}">"#, v.meet_opacity)?;
            writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                p.x,
                p.y,
                config.marker.radius,
                rgb_hex(config.colors.merge)
            )?;
            writeln!(
                out,
                r#"    <text x="{}" y="{}" font-size="{LABEL_FONT_SIZE}" fill="{LABEL_FILL}">{}</text>"#,
                p.x + LABEL_OFFSET.0,
                p.y + LABEL_OFFSET.1,
                escape_xml(&config.marker.label)
            )?;
            writeln!(out, "  </g>")?;
        }
    }

    out.push_str("</svg>\n");
    Ok(())
}

fn push_stroked(
    out: &mut String,
    path: &PathDescriptor,
    color: Rgba8,
    width: f64,
    fraction: f64,
    opacity: f64,
) -> fmt::Result {
    if fraction <= 0.0 || opacity <= 0.0 {
        return Ok(());
    }
    let dash = if fraction < 1.0 {
        let len = path.arc_length();
        format!(r#" stroke-dasharray="{:.3} {:.3}""#, len * fraction, len)
    } else {
        String::new()
    };
    writeln!(
        out,
        r#"  <path d="{}" fill="none" stroke="{}" stroke-opacity="{:.4}" stroke-width="{width}" stroke-linecap="round"{dash} opacity="{opacity:.4}"/>"#,
        path.svg_path_data(),
        rgb_hex(color),
        color.alpha_f64(),
    )
}

fn rgb_hex(c: Rgba8) -> String {
    Rgba8 { a: 255, ..c }.to_hex()
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/preview/svg.rs"]
mod tests;
