// src/plot_functions/plot_velocity.rs

use ndarray::Array1;

use crate::constants::{
    CHANNEL_VELOCITY_LIMITED, CHANNEL_VELOCITY_RAW, COLOR_VELOCITY_LIMITED, COLOR_VELOCITY_RAW,
    LINE_WIDTH_PLOT,
};
use crate::data_input::trajectory_data::Trajectory;
use crate::plot_framework::{calculate_range, PanelConfig, PlotSeries};
use crate::types::TrajectoryResult;

/// Builds the raw vs. limited velocity panel.
pub fn velocity_panel(
    trajectory: &Trajectory,
    time: &Array1<f64>,
) -> TrajectoryResult<Option<PanelConfig>> {
    if trajectory.is_empty() {
        return Ok(None);
    }

    let raw = trajectory.channel(CHANNEL_VELOCITY_RAW)?;
    let limited = trajectory.channel(CHANNEL_VELOCITY_LIMITED)?;

    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for &v in raw.iter().chain(limited.iter()) {
        val_min = val_min.min(v);
        val_max = val_max.max(v);
    }
    let (y_lo, y_hi) = calculate_range(val_min, val_max);

    Ok(Some(PanelConfig {
        title: "Velocity".to_string(),
        x_range: time[0]..time[time.len() - 1],
        y_range: y_lo..y_hi,
        series: vec![
            PlotSeries {
                data: time.iter().zip(raw.iter()).map(|(&t, &v)| (t, v)).collect(),
                label: "Raw".to_string(),
                color: *COLOR_VELOCITY_RAW,
                stroke_width: LINE_WIDTH_PLOT,
            },
            PlotSeries {
                data: time.iter().zip(limited.iter()).map(|(&t, &v)| (t, v)).collect(),
                label: "Limited".to_string(),
                color: *COLOR_VELOCITY_LIMITED,
                stroke_width: LINE_WIDTH_PLOT,
            },
        ],
        x_label: "Time (s)".to_string(),
        y_label: "Velocity (m/s)".to_string(),
        equal_aspect: false,
    }))
}

// src/plot_functions/plot_velocity.rs
