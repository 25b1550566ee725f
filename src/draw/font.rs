//! Font loading and glyph outlining for text shapes.

use super::geometry::Point;
use ab_glyph::{Font, FontArc, OutlineCurve};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::PathBuilder;

/// Fonts tried in order when no font path is configured.
pub const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
];

/// Loads the font used for text shapes.
///
/// A configured path is tried first, then [`FALLBACK_FONT_PATHS`]. Returns `None` (with a
/// single warning) when nothing loads; text shapes then render nothing.
pub fn load_font(configured: Option<&Path>) -> Option<FontArc> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(FALLBACK_FONT_PATHS.iter().map(PathBuf::from));

    for path in candidates {
        match read_font(&path) {
            Ok(font) => {
                debug!("Loaded font from {}", path.display());
                return Some(font);
            }
            Err(err) => debug!("Skipping font {}: {:#}", path.display(), err),
        }
    }

    warn!("No usable font found; text shapes will not be rendered");
    None
}

fn read_font(path: &Path) -> Result<FontArc> {
    let bytes = fs::read(path).context("unreadable")?;
    FontArc::try_from_vec(bytes).context("not a TrueType/OpenType font")
}

/// Builds the outline path of `text` laid out from the baseline origin `origin`.
///
/// Glyph advances and kerning are scaled by `size / units_per_em`. Returns `None` for empty
/// text, a non-positive size, or a string with no outlined glyphs (e.g. only spaces).
pub fn text_path(font: &FontArc, text: &str, origin: Point, size: f64) -> Option<tiny_skia::Path> {
    if text.is_empty() || size <= 0.0 {
        return None;
    }
    let upem = font.units_per_em()? as f64;
    let scale = size / upem;

    let mut builder = PathBuilder::new();
    let mut pen_x = origin.x;
    let mut previous = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = previous {
            pen_x += font.kern_unscaled(prev, id) as f64 * scale;
        }

        if let Some(outline) = font.outline(id) {
            let map = |p: ab_glyph::Point| {
                (
                    (pen_x + p.x as f64 * scale) as f32,
                    (origin.y - p.y as f64 * scale) as f32,
                )
            };
            let mut cursor: Option<(f32, f32)> = None;
            for curve in &outline.curves {
                let start = match curve {
                    OutlineCurve::Line(p0, _)
                    | OutlineCurve::Quad(p0, _, _)
                    | OutlineCurve::Cubic(p0, _, _, _) => map(*p0),
                };
                if cursor != Some(start) {
                    if cursor.is_some() {
                        builder.close();
                    }
                    builder.move_to(start.0, start.1);
                }
                let end = match curve {
                    OutlineCurve::Line(_, p1) => {
                        let (x, y) = map(*p1);
                        builder.line_to(x, y);
                        (x, y)
                    }
                    OutlineCurve::Quad(_, p1, p2) => {
                        let (cx, cy) = map(*p1);
                        let (x, y) = map(*p2);
                        builder.quad_to(cx, cy, x, y);
                        (x, y)
                    }
                    OutlineCurve::Cubic(_, p1, p2, p3) => {
                        let (c1x, c1y) = map(*p1);
                        let (c2x, c2y) = map(*p2);
                        let (x, y) = map(*p3);
                        builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
                        (x, y)
                    }
                };
                cursor = Some(end);
            }
            if cursor.is_some() {
                builder.close();
            }
        }

        pen_x += font.h_advance_unscaled(id) as f64 * scale;
        previous = Some(id);
    }

    builder.finish()
}
