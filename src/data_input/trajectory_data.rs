// src/data_input/trajectory_data.rs

use ndarray::Array1;

use crate::types::{TrajectoryError, TrajectoryResult};

/// One parsed trajectory: an ordered sequence of fixed-width f64 records,
/// insertion order = temporal order. Immutable once constructed; field
/// meaning is positional (see the channel constants in `constants.rs`).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Trajectory {
    records: Vec<Vec<f64>>,
}

impl Trajectory {
    /// Builds a trajectory from already-validated rows. The parser is the
    /// only production constructor and guarantees uniform record width.
    pub(crate) fn from_records(records: Vec<Vec<f64>>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Common record width, or 0 for an empty trajectory.
    pub fn width(&self) -> usize {
        self.records.first().map_or(0, Vec::len)
    }

    pub fn records(&self) -> &[Vec<f64>] {
        &self.records
    }

    /// Positional channel projection: the value at `index` from every record,
    /// in temporal order. A pure selector - no filtering, smoothing, or unit
    /// conversion. An empty trajectory projects to an empty channel for any
    /// index; otherwise an out-of-range index is a caller defect.
    pub fn channel(&self, index: usize) -> TrajectoryResult<Array1<f64>> {
        if self.is_empty() {
            return Ok(Array1::from(Vec::new()));
        }
        let width = self.width();
        if index >= width {
            return Err(TrajectoryError::Index { index, width });
        }
        Ok(Array1::from_iter(self.records.iter().map(|r| r[index])))
    }
}

/// Synthesized time axis: `sample_count` evenly spaced stamps
/// `0, dt, 2*dt, .., (N-1)*dt`. Pure function of the count and the fixed
/// interval; an empty trajectory yields an empty axis.
pub fn time_axis(sample_count: usize, dt_seconds: f64) -> Array1<f64> {
    Array1::from_iter((0..sample_count).map(|i| i as f64 * dt_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trajectory() -> Trajectory {
        Trajectory::from_records(vec![
            vec![0.0, 0.5, 90.0],
            vec![1.0, 0.6, 91.5],
            vec![2.0, 0.7, 93.0],
        ])
    }

    #[test]
    fn test_channel_is_positional_read() {
        let trajectory = sample_trajectory();
        let heading = trajectory.channel(2).unwrap();
        assert_eq!(heading.to_vec(), vec![90.0, 91.5, 93.0]);
        let x = trajectory.channel(0).unwrap();
        assert_eq!(x.to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_channel_out_of_range_is_index_error() {
        let trajectory = sample_trajectory();
        assert_eq!(
            trajectory.channel(3),
            Err(TrajectoryError::Index { index: 3, width: 3 })
        );
    }

    #[test]
    fn test_empty_trajectory_projects_empty_channel() {
        let trajectory = Trajectory::default();
        assert_eq!(trajectory.channel(5).unwrap().len(), 0);
        assert_eq!(trajectory.width(), 0);
    }

    #[test]
    fn test_time_axis_spacing_and_bounds() {
        let axis = time_axis(4, 0.01);
        assert_eq!(axis.len(), 4);
        assert_eq!(axis[0], 0.0);
        for i in 1..axis.len() {
            assert!((axis[i] - axis[i - 1] - 0.01).abs() < 1e-12);
        }
        assert!((axis[3] - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_time_axis_empty_for_zero_samples() {
        assert_eq!(time_axis(0, 0.01).len(), 0);
    }

    #[test]
    fn test_time_axis_single_sample_starts_at_zero() {
        let axis = time_axis(1, 0.05);
        assert_eq!(axis.to_vec(), vec![0.0]);
    }
}

// src/data_input/trajectory_data.rs
