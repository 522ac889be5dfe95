use glam::Vec3;

// Shared animation and screen tuning constants used by the core and the native frontend.

// Motion model
pub const CONVERGENCE_RATE: f32 = 0.6; // units (or radians) per second, all elements and axes
pub const SNAP_EPSILON: f32 = 0.01; // gaps at or below this snap straight to the target

// Interaction
pub const PRESS_DEPTH: f32 = 0.1; // how far a hovered button sinks toward the housing
pub const TILT_GAIN: f32 = 0.4; // radians of pad tilt per scene unit of pointer offset
pub const TILT_MAX: f32 = 0.1; // tilt cap in radians

// Screen tuning defaults
pub const DEFAULT_ROWS: u32 = 40;
pub const DEFAULT_COLUMNS: u32 = 357;
pub const DEFAULT_BAR_HEIGHT: f32 = 0.8;
pub const DEFAULT_BAR_WIDTH: f32 = 0.25;
pub const DEFAULT_BAR_WIDTH_GAP: f32 = 0.05;
pub const DEFAULT_BRIGHTNESS: f32 = 1.49;
pub const DEFAULT_THRESHOLD: f32 = 0.59;

// Screen tuning bounds (inclusive)
pub const GRID_MIN: u32 = 1;
pub const GRID_MAX: u32 = 600;
pub const BAR_HEIGHT_MAX: f32 = 1.0;
pub const BAR_WIDTH_MAX: f32 = 0.5;
pub const BAR_WIDTH_GAP_MAX: f32 = 0.3;
pub const BRIGHTNESS_MAX: f32 = 5.0;
pub const THRESHOLD_MAX: f32 = 10.0;

// Colour of unlit segments and of the whole screen while no image is loaded
pub const SCREEN_BACKGROUND: [f32; 4] = [0.06, 0.08, 0.05, 1.0];

// Rec.601 luma weights
pub const LUMA_WEIGHTS: Vec3 = Vec3::new(0.299, 0.587, 0.114);

// Console layout (scene units). Buttons rest on the front face of the body.
pub const BODY_CENTER: [f32; 3] = [0.05, 0.3, 0.0];
pub const BODY_HALF_EXTENTS: [f32; 3] = [3.4, 5.7, 0.85];
pub const SCREEN_CENTER: [f32; 3] = [0.0, 2.8, 0.87];
pub const SCREEN_SIZE: [f32; 2] = [5.0, 4.0];

pub const DPAD_POSITION: [f32; 3] = [-1.968, -2.041, 0.985];
pub const BUTTON_A_POSITION: [f32; 3] = [2.611, -1.661, 0.984];
pub const BUTTON_B_POSITION: [f32; 3] = [1.425, -2.216, 0.984];
pub const BUTTON_SELECT_POSITION: [f32; 3] = [-0.825, -4.071, 0.963];
pub const BUTTON_START_POSITION: [f32; 3] = [0.492, -4.067, 0.963];
