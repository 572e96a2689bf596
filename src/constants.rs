// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, LIGHTBLUE, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// Sampling interval of the trajectory source, in seconds per sample.
// Fixed by contract with the source; never derived from the input stream.
pub const DT_SECONDS: f64 = 0.01;

// Subcommand the trajectory source executable expects when asked to dump
// its samples to stdout.
pub const DEFAULT_SOURCE_SUBCOMMAND: &str = "print";

// --- Record Field Layout ---
// Field meaning is positional and frozen by contract with the trajectory
// source. The schema keeps its full width even though curvature and angular
// velocity are not currently rendered.
pub const CHANNEL_X_M: usize = 0;
pub const CHANNEL_Y_M: usize = 1;
pub const CHANNEL_HEADING_DEG: usize = 2;
pub const CHANNEL_VELOCITY_RAW: usize = 3;
pub const CHANNEL_VELOCITY_LIMITED: usize = 4;
pub const CHANNEL_WHEEL_LEFT: usize = 5;
pub const CHANNEL_WHEEL_RIGHT: usize = 6;

pub const TRAJECTORY_FIELD_COUNT: usize = 7;

pub const CHANNEL_NAMES: [&str; TRAJECTORY_FIELD_COUNT] = [
    "x (m)",
    "y (m)",
    "heading (deg)",
    "raw velocity (m/s)",
    "limited velocity (m/s)",
    "left wheel speed (m/s)",
    "right wheel speed (m/s)",
];

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Chart layout sizes, shared by the framework and the equal-aspect math.
pub const CHART_MARGIN: i32 = 5;
pub const X_LABEL_AREA_SIZE: i32 = 40;
pub const Y_LABEL_AREA_SIZE: i32 = 60;
pub const CAPTION_AREA_ESTIMATE: i32 = 30;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 24;

// --- Plot Color Assignments ---
pub const COLOR_PATH: &RGBColor = &BLUE;
pub const COLOR_HEADING: &RGBColor = &PURPLE;
pub const COLOR_VELOCITY_RAW: &RGBColor = &ORANGE;
pub const COLOR_VELOCITY_LIMITED: &RGBColor = &GREEN;
pub const COLOR_WHEEL_LEFT: &RGBColor = &LIGHTBLUE;
pub const COLOR_WHEEL_RIGHT: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
