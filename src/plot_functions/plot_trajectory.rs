// src/plot_functions/plot_trajectory.rs

use std::error::Error;

use crate::constants::DT_SECONDS;
use crate::data_input::trajectory_data::{time_axis, Trajectory};
use crate::plot_framework::draw_grid_plot;
use crate::plot_functions::{plot_heading, plot_path, plot_velocity, plot_wheel_speeds};

/// Generates the 2x2 trajectory diagnostic grid: path, heading, raw vs.
/// limited velocity, and wheel speeds, all against the synthesized fixed-step
/// time axis. Presentation only - any numeric error has already surfaced in
/// parsing or projection.
pub fn plot_trajectory(trajectory: &Trajectory, output_file: &str) -> Result<(), Box<dyn Error>> {
    let time = time_axis(trajectory.len(), DT_SECONDS);

    let panels = [
        ("Path", plot_path::path_panel(trajectory)?),
        ("Heading", plot_heading::heading_panel(trajectory, &time)?),
        ("Velocity", plot_velocity::velocity_panel(trajectory, &time)?),
        (
            "Wheel Speeds",
            plot_wheel_speeds::wheel_speeds_panel(trajectory, &time)?,
        ),
    ];

    draw_grid_plot(output_file, panels)
}

// src/plot_functions/plot_trajectory.rs
