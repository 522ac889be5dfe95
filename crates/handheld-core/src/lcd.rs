//! CPU rendition of the segmented LCD screen effect.
//!
//! Mirrors `shaders/screen.wgsl` fragment for fragment. The native frontend
//! uses it for headless snapshots; tests use it to pin the algorithm down.

use crate::constants::LUMA_WEIGHTS;
use crate::screen::ShaderConfig;
use crate::source::SourceImage;
use glam::{UVec2, Vec2, Vec4};

/// Grid cell addressed by a fragment, plus its position inside that cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
    /// Cell-local coordinate in [0,1]².
    pub local: Vec2,
}

/// Map a surface coordinate to its grid cell. Zero-sized grids are treated
/// as 1x1 and `uv` is clamped to the unit square, so every input lands in
/// exactly one cell.
pub fn cell_for_uv(uv: Vec2, columns: u32, rows: u32) -> Cell {
    let grid = UVec2::new(columns.max(1), rows.max(1));
    let gridf = grid.as_vec2();
    let scaled = uv.clamp(Vec2::ZERO, Vec2::ONE) * gridf;
    let index = scaled.floor().as_uvec2().min(grid - UVec2::ONE);
    Cell {
        col: index.x,
        row: index.y,
        local: (scaled - index.as_vec2()).clamp(Vec2::ZERO, Vec2::ONE),
    }
}

/// Normalised coordinate of the centre of a cell.
pub fn cell_center(cell: &Cell, columns: u32, rows: u32) -> Vec2 {
    let gridf = UVec2::new(columns.max(1), rows.max(1)).as_vec2();
    (Vec2::new(cell.col as f32, cell.row as f32) + 0.5) / gridf
}

#[inline]
pub fn luminance(color: Vec4) -> f32 {
    color.truncate().dot(LUMA_WEIGHTS)
}

/// Whether a cell-local coordinate falls inside the centred bar rectangle.
#[inline]
pub fn bar_contains(local: Vec2, width_fraction: f32, height_fraction: f32) -> bool {
    let half = Vec2::new(width_fraction.clamp(0.0, 1.0), height_fraction.clamp(0.0, 1.0)) * 0.5;
    let d = (local - Vec2::splat(0.5)).abs();
    d.x <= half.x && d.y <= half.y
}

/// A cell is lit when its brightness-scaled luminance reaches the threshold.
#[inline]
pub fn is_lit(sample: Vec4, brightness: f32, threshold: f32) -> bool {
    luminance(sample) * brightness.max(0.0) >= threshold.max(0.0)
}

/// Colour of one fragment. Without a source image the whole screen shows
/// the background colour.
pub fn shade(config: &ShaderConfig, source: Option<&SourceImage>, uv: Vec2) -> Vec4 {
    let background = Vec4::from_array(config.background);
    let Some(image) = source else {
        return background;
    };
    let cell = cell_for_uv(uv, config.columns, config.rows);
    let sample = image.sample(cell_center(&cell, config.columns, config.rows));
    if !is_lit(sample, config.brightness, config.threshold) {
        return background;
    }
    if bar_contains(
        cell.local,
        config.bar_width_fraction(),
        config.bar_height_fraction(),
    ) {
        sample.truncate().extend(1.0)
    } else {
        background
    }
}

/// Rasterise the screen into an RGBA8 buffer of `width * height` pixels,
/// sampling each pixel at its centre.
pub fn render_rgba(
    config: &ShaderConfig,
    source: Option<&SourceImage>,
    width: u32,
    height: u32,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    let size = UVec2::new(width.max(1), height.max(1)).as_vec2();
    for y in 0..height {
        for x in 0..width {
            let uv = (Vec2::new(x as f32, y as f32) + 0.5) / size;
            let c = shade(config, source, uv).clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
            out.extend_from_slice(&[
                c.x.round() as u8,
                c.y.round() as u8,
                c.z.round() as u8,
                c.w.round() as u8,
            ]);
        }
    }
    out
}
