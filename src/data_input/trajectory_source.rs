// src/data_input/trajectory_source.rs

use std::process::Command;

use crate::types::{TrajectoryError, TrajectoryResult};

/// Invokes the trajectory source executable with the given subcommand and
/// captures its stdout to end-of-stream in one blocking read. The call does
/// not return until the child exits and closes its output; this is a
/// diagnostic tool, so no timeout or cancellation path exists.
///
/// A spawn failure, or a failed exit with nothing on stdout, is
/// `SourceUnavailable`. Whatever a successful run printed is authoritative
/// and handed to the parser as-is, even if empty.
pub fn capture_trajectory_output(program: &str, subcommand: &str) -> TrajectoryResult<String> {
    let output = Command::new(program).arg(subcommand).output().map_err(|e| {
        TrajectoryError::SourceUnavailable(format!("failed to start '{program}': {e}"))
    })?;

    if !output.status.success() && output.stdout.is_empty() {
        return Err(TrajectoryError::SourceUnavailable(format!(
            "'{program} {subcommand}' exited with {} and produced no output",
            output.status
        )));
    }

    String::from_utf8(output.stdout).map_err(|e| {
        TrajectoryError::SourceUnavailable(format!("'{program}' emitted non-UTF-8 output: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_source_unavailable() {
        let result = capture_trajectory_output("/nonexistent/trajectory_source", "print");
        assert!(matches!(result, Err(TrajectoryError::SourceUnavailable(_))));
    }
}

// src/data_input/trajectory_source.rs
