// src/plot_functions/mod.rs

pub mod plot_heading;
pub mod plot_path;
pub mod plot_trajectory;
pub mod plot_velocity;
pub mod plot_wheel_speeds;

// src/plot_functions/mod.rs
