// src/data_input/mod.rs

pub mod trajectory_data;
pub mod trajectory_parser;
pub mod trajectory_source;

// src/data_input/mod.rs
