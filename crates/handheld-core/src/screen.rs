//! Screen tuning values and the uniform state fed to the LCD pipeline.

use crate::constants::*;

/// Flat tuning configuration supplied by the host (keyboard, command line).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub rows: u32,
    pub columns: u32,
    pub bar_height: f32,
    pub bar_width: f32,
    pub bar_width_gap: f32,
    pub brightness: f32,
    pub threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            bar_height: DEFAULT_BAR_HEIGHT,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_width_gap: DEFAULT_BAR_WIDTH_GAP,
            brightness: DEFAULT_BRIGHTNESS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Clamp every field into its recognised range. Non-finite floats fall
    /// back to the default.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.clamp(GRID_MIN, GRID_MAX),
            columns: self.columns.clamp(GRID_MIN, GRID_MAX),
            bar_height: clamp_or(self.bar_height, BAR_HEIGHT_MAX, DEFAULT_BAR_HEIGHT),
            bar_width: clamp_or(self.bar_width, BAR_WIDTH_MAX, DEFAULT_BAR_WIDTH),
            bar_width_gap: clamp_or(self.bar_width_gap, BAR_WIDTH_GAP_MAX, DEFAULT_BAR_WIDTH_GAP),
            brightness: clamp_or(self.brightness, BRIGHTNESS_MAX, DEFAULT_BRIGHTNESS),
            threshold: clamp_or(self.threshold, THRESHOLD_MAX, DEFAULT_THRESHOLD),
        }
    }
}

#[inline]
fn clamp_or(v: f32, max: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, max)
    } else {
        fallback
    }
}

/// Uniform state of the screen surface, rewritten every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderConfig {
    pub rows: u32,
    pub columns: u32,
    pub bar_width: f32,
    pub bar_width_gap: f32,
    pub bar_height: f32,
    pub brightness: f32,
    pub threshold: f32,
    pub time: f32,
    pub background: [f32; 4],
}

impl Default for ShaderConfig {
    fn default() -> Self {
        let mut c = Self {
            rows: 0,
            columns: 0,
            bar_width: 0.0,
            bar_width_gap: 0.0,
            bar_height: 0.0,
            brightness: 0.0,
            threshold: 0.0,
            time: 0.0,
            background: SCREEN_BACKGROUND,
        };
        c.apply(&Tuning::default());
        c
    }
}

impl ShaderConfig {
    /// Copy the live tuning values in, clamped to their valid ranges.
    pub fn apply(&mut self, tuning: &Tuning) {
        let t = tuning.clamped();
        self.rows = t.rows;
        self.columns = t.columns;
        self.bar_height = t.bar_height;
        self.bar_width = t.bar_width;
        self.bar_width_gap = t.bar_width_gap;
        self.brightness = t.brightness;
        self.threshold = t.threshold;
    }

    pub fn advance_time(&mut self, elapsed: f32) {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.time += elapsed;
        }
    }

    /// Fraction of the cell width covered by a lit bar.
    pub fn bar_width_fraction(&self) -> f32 {
        (self.bar_width - self.bar_width_gap).clamp(0.0, 1.0)
    }

    /// Fraction of the cell height covered by a lit bar.
    pub fn bar_height_fraction(&self) -> f32 {
        self.bar_height.clamp(0.0, 1.0)
    }

    pub fn uniforms(&self, has_image: bool) -> ScreenUniforms {
        ScreenUniforms {
            background: self.background,
            rows: self.rows.max(GRID_MIN) as f32,
            columns: self.columns.max(GRID_MIN) as f32,
            bar_width: self.bar_width_fraction(),
            bar_height: self.bar_height_fraction(),
            brightness: self.brightness.max(0.0),
            threshold: self.threshold.max(0.0),
            time: self.time,
            has_image: if has_image { 1.0 } else { 0.0 },
        }
    }
}

/// GPU layout of the screen uniforms; must match `Screen` in `screen.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniforms {
    pub background: [f32; 4],
    pub rows: f32,
    pub columns: f32,
    pub bar_width: f32, // effective, gap already removed
    pub bar_height: f32,
    pub brightness: f32,
    pub threshold: f32,
    pub time: f32,
    pub has_image: f32,
}
