// src/plot_functions/plot_wheel_speeds.rs

use ndarray::Array1;

use crate::constants::{
    CHANNEL_WHEEL_LEFT, CHANNEL_WHEEL_RIGHT, COLOR_WHEEL_LEFT, COLOR_WHEEL_RIGHT, LINE_WIDTH_PLOT,
};
use crate::data_input::trajectory_data::Trajectory;
use crate::plot_framework::{calculate_range, PanelConfig, PlotSeries};
use crate::types::TrajectoryResult;

/// Builds the left/right wheel speed panel.
pub fn wheel_speeds_panel(
    trajectory: &Trajectory,
    time: &Array1<f64>,
) -> TrajectoryResult<Option<PanelConfig>> {
    if trajectory.is_empty() {
        return Ok(None);
    }

    let left = trajectory.channel(CHANNEL_WHEEL_LEFT)?;
    let right = trajectory.channel(CHANNEL_WHEEL_RIGHT)?;

    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for &v in left.iter().chain(right.iter()) {
        val_min = val_min.min(v);
        val_max = val_max.max(v);
    }
    let (y_lo, y_hi) = calculate_range(val_min, val_max);

    Ok(Some(PanelConfig {
        title: "Wheel Speeds".to_string(),
        x_range: time[0]..time[time.len() - 1],
        y_range: y_lo..y_hi,
        series: vec![
            PlotSeries {
                data: time.iter().zip(left.iter()).map(|(&t, &v)| (t, v)).collect(),
                label: "Left".to_string(),
                color: *COLOR_WHEEL_LEFT,
                stroke_width: LINE_WIDTH_PLOT,
            },
            PlotSeries {
                data: time.iter().zip(right.iter()).map(|(&t, &v)| (t, v)).collect(),
                label: "Right".to_string(),
                color: *COLOR_WHEEL_RIGHT,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ],
        x_label: "Time (s)".to_string(),
        y_label: "Velocity (m/s)".to_string(),
        equal_aspect: false,
    }))
}

// src/plot_functions/plot_wheel_speeds.rs
