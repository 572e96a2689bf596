// src/plot_functions/plot_path.rs

use crate::constants::{CHANNEL_X_M, CHANNEL_Y_M, COLOR_PATH, LINE_WIDTH_PLOT};
use crate::data_input::trajectory_data::Trajectory;
use crate::plot_framework::{calculate_range, PanelConfig, PlotSeries};
use crate::types::TrajectoryResult;

/// Builds the 2D path panel (x vs. y, equal aspect).
pub fn path_panel(trajectory: &Trajectory) -> TrajectoryResult<Option<PanelConfig>> {
    if trajectory.is_empty() {
        return Ok(None);
    }

    let x = trajectory.channel(CHANNEL_X_M)?;
    let y = trajectory.channel(CHANNEL_Y_M)?;

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        x_min = x_min.min(xv);
        x_max = x_max.max(xv);
        y_min = y_min.min(yv);
        y_max = y_max.max(yv);
    }

    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    Ok(Some(PanelConfig {
        title: "Path".to_string(),
        x_range: x_lo..x_hi,
        y_range: y_lo..y_hi,
        series: vec![PlotSeries {
            data: x.iter().zip(y.iter()).map(|(&xv, &yv)| (xv, yv)).collect(),
            label: String::new(),
            color: *COLOR_PATH,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "x (m)".to_string(),
        y_label: "y (m)".to_string(),
        equal_aspect: true,
    }))
}

// src/plot_functions/plot_path.rs
