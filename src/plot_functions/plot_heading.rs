// src/plot_functions/plot_heading.rs

use ndarray::Array1;

use crate::constants::{CHANNEL_HEADING_DEG, COLOR_HEADING, LINE_WIDTH_PLOT};
use crate::data_input::trajectory_data::Trajectory;
use crate::plot_framework::{calculate_range, PanelConfig, PlotSeries};
use crate::types::TrajectoryResult;

/// Builds the heading angle vs. time panel.
pub fn heading_panel(
    trajectory: &Trajectory,
    time: &Array1<f64>,
) -> TrajectoryResult<Option<PanelConfig>> {
    if trajectory.is_empty() {
        return Ok(None);
    }

    let heading = trajectory.channel(CHANNEL_HEADING_DEG)?;

    let mut val_min = f64::INFINITY;
    let mut val_max = f64::NEG_INFINITY;
    for &v in heading.iter() {
        val_min = val_min.min(v);
        val_max = val_max.max(v);
    }
    let (y_lo, y_hi) = calculate_range(val_min, val_max);

    Ok(Some(PanelConfig {
        title: "Heading".to_string(),
        x_range: time[0]..time[time.len() - 1],
        y_range: y_lo..y_hi,
        series: vec![PlotSeries {
            data: time.iter().zip(heading.iter()).map(|(&t, &v)| (t, v)).collect(),
            label: String::new(),
            color: *COLOR_HEADING,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Time (s)".to_string(),
        y_label: "Heading (deg)".to_string(),
        equal_aspect: false,
    }))
}

// src/plot_functions/plot_heading.rs
