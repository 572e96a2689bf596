// src/data_input/trajectory_parser.rs

use csv::ReaderBuilder;

use crate::data_input::trajectory_data::Trajectory;
use crate::types::{TrajectoryError, TrajectoryResult};

/// Parses the captured source output into a trajectory.
///
/// Records are newline-separated, fields comma-separated decimal floats
/// (scientific notation accepted). Blank lines, including the trailing one
/// most sources emit, are noise and ignored. Any non-finite field is a
/// `Parse` error; any width disagreement between retained records is a
/// `Schema` error. Both abort the whole parse with no partial result - a
/// silently shortened or shifted row would corrupt every positional channel
/// downstream.
pub fn parse_trajectory(blob: &str) -> TrajectoryResult<Trajectory> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(blob.as_bytes());

    let mut records: Vec<Vec<f64>> = Vec::new();
    let mut expected_width: Option<usize> = None;

    for (row_index, result) in reader.records().enumerate() {
        // 1-based ordinal of the retained record; the csv reader has
        // already dropped fully empty lines.
        let record_no = row_index + 1;
        let record = result.map_err(|e| TrajectoryError::Parse {
            record: record_no,
            token: e.to_string(),
        })?;

        // A whitespace-only line trims down to a single empty field.
        if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
            continue;
        }

        let found = record.len();
        match expected_width {
            None => expected_width = Some(found),
            Some(expected) if expected != found => {
                return Err(TrajectoryError::Schema {
                    record: record_no,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        let mut row = Vec::with_capacity(found);
        for field in record.iter() {
            let value: f64 = field.parse().map_err(|_| TrajectoryError::Parse {
                record: record_no,
                token: field.to_string(),
            })?;
            if !value.is_finite() {
                return Err(TrajectoryError::Parse {
                    record: record_no,
                    token: field.to_string(),
                });
            }
            row.push(value);
        }
        records.push(row);
    }

    Ok(Trajectory::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_blob_parses_in_field_order() {
        let trajectory = parse_trajectory("0,0,0,1,1,1,1\n1,0.5,-2.5,2,1.5,1,2\n").unwrap();
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.width(), 7);
        assert_eq!(trajectory.records()[1], vec![1.0, 0.5, -2.5, 2.0, 1.5, 1.0, 2.0]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let trajectory = parse_trajectory("1,2\n\n   \n3,4\n\n").unwrap();
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.records()[0], vec![1.0, 2.0]);
        assert_eq!(trajectory.records()[1], vec![3.0, 4.0]);
    }

    #[test]
    fn test_empty_blob_yields_empty_trajectory() {
        let trajectory = parse_trajectory("").unwrap();
        assert!(trajectory.is_empty());
        let trajectory = parse_trajectory("\n\n").unwrap();
        assert!(trajectory.is_empty());
    }

    #[test]
    fn test_inconsistent_width_is_schema_error() {
        assert_eq!(
            parse_trajectory("1,2,3\n1,2\n"),
            Err(TrajectoryError::Schema {
                record: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_non_numeric_field_is_parse_error() {
        assert_eq!(
            parse_trajectory("1,2,x\n"),
            Err(TrajectoryError::Parse {
                record: 1,
                token: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_nan_field_is_parse_error() {
        assert_eq!(
            parse_trajectory("1,NaN\n"),
            Err(TrajectoryError::Parse {
                record: 1,
                token: "NaN".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_field_is_parse_error() {
        assert!(matches!(
            parse_trajectory("1,,3\n"),
            Err(TrajectoryError::Parse { record: 1, .. })
        ));
    }

    #[test]
    fn test_scientific_notation_is_accepted() {
        let trajectory = parse_trajectory("1e-3,-2.5E2\n").unwrap();
        assert_eq!(trajectory.records()[0], vec![0.001, -250.0]);
    }

    #[test]
    fn test_parse_is_idempotent_by_value() {
        let blob = "0,1,2\n3,4,5\n";
        assert_eq!(parse_trajectory(blob).unwrap(), parse_trajectory(blob).unwrap());
    }
}

// src/data_input/trajectory_parser.rs
