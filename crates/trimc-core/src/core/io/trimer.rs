use super::traits::SnapshotFile;
use crate::core::models::configuration::Configuration;
use crate::core::models::diameter::Diameter;
use crate::core::utils::formatting::format_scientific;
use crate::core::utils::geometry::PeriodicBox;
use nalgebra::Vector3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Diameters and unwrapped coordinates read from a snapshot file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    diameters: Vec<Diameter>,
    positions: Vec<Vector3<f64>>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn diameters(&self) -> &[Diameter] {
        &self.diameters
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    /// Builds a configuration whose unwrapped positions are the file coordinates.
    pub fn into_configuration(self, periodic_box: PeriodicBox) -> Configuration {
        Configuration::new(periodic_box, self.positions, self.diameters)
    }
}

#[derive(Debug, Error)]
pub enum TrimerFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: TrimerParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum TrimerParseErrorKind {
    #[error("Expected 4 or 5 columns, found {found}")]
    ColumnCount { found: usize },
    #[error("Invalid number in column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
    #[error("Diameter {value} is not one of 0.9, 1.0, 1.1")]
    UnknownDiameter { value: f64 },
}

/// Whitespace-separated trimer snapshot format.
///
/// Each non-blank line holds `diameter x y z` or `molecule_id diameter x y z`; the column count
/// is detected per line. Files are written in the four-column layout.
pub struct TrimerFile;

impl TrimerFile {
    fn parse_line(line: &str, line_number: usize) -> Result<(Diameter, Vector3<f64>), TrimerFileError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let offset = match fields.len() {
            4 => 0,
            5 => 1,
            found => {
                return Err(TrimerFileError::Parse {
                    line: line_number,
                    kind: TrimerParseErrorKind::ColumnCount { found },
                });
            }
        };

        let mut values = [0.0; 5];
        for (column, field) in fields.iter().enumerate() {
            values[column] = field.parse::<f64>().map_err(|_| TrimerFileError::Parse {
                line: line_number,
                kind: TrimerParseErrorKind::InvalidFloat {
                    column: column + 1,
                    value: field.to_string(),
                },
            })?;
        }

        let raw_diameter = values[offset];
        let diameter = Diameter::from_value(raw_diameter).ok_or(TrimerFileError::Parse {
            line: line_number,
            kind: TrimerParseErrorKind::UnknownDiameter {
                value: raw_diameter,
            },
        })?;
        let position = Vector3::new(values[offset + 1], values[offset + 2], values[offset + 3]);
        Ok((diameter, position))
    }
}

impl SnapshotFile for TrimerFile {
    type Error = TrimerFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Snapshot, Self::Error> {
        let mut snapshot = Snapshot {
            diameters: Vec::new(),
            positions: Vec::new(),
        };
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (diameter, position) = Self::parse_line(&line, index + 1)?;
            snapshot.diameters.push(diameter);
            snapshot.positions.push(position);
        }
        Ok(snapshot)
    }

    fn write_to(cfg: &Configuration, writer: &mut impl Write) -> Result<(), Self::Error> {
        for (diameter, p) in cfg.diameters().iter().zip(cfg.unwrapped_positions()) {
            writeln!(
                writer,
                "{} {} {} {}",
                format_scientific(diameter.value()),
                format_scientific(p.x),
                format_scientific(p.y),
                format_scientific(p.z)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn read_str(content: &str) -> Result<Snapshot, TrimerFileError> {
        TrimerFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_four_column_lines() {
        let snapshot = read_str("0.9 1.0 2.0 3.0\n1.1 -0.5 0.25 12.0\n").unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.diameters, vec![Diameter::Small, Diameter::Large]);
        assert_eq!(snapshot.positions[1], Vector3::new(-0.5, 0.25, 12.0));
    }

    #[test]
    fn reads_five_column_lines_ignoring_molecule_id() {
        let snapshot = read_str("0 1.0 1.0 2.0 3.0\n0 0.9 4.0 5.0 6.0").unwrap();
        assert_eq!(snapshot.diameters, vec![Diameter::Medium, Diameter::Small]);
        assert_eq!(snapshot.positions[0], Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn column_count_is_detected_per_line_and_blank_lines_are_skipped() {
        let snapshot = read_str("1.0 0 0 0\n\n   \n7 1.1 1 1 1\n").unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn snapshot_keeps_one_diameter_per_coordinate_row() {
        let snapshot = read_str("0.9 0 0 0\n3 1.0 1 1 1\n1.1 2 2 2\n").unwrap();
        assert_eq!(snapshot.diameters().len(), snapshot.positions().len());

        let cfg = snapshot.into_configuration(PeriodicBox::new(5.0));
        assert_eq!(cfg.len(), 3);
        assert_eq!(cfg.diameters().len(), cfg.positions().len());
        assert_eq!(cfg.diameter(1), Diameter::Medium);
    }

    #[test]
    fn rejects_wrong_column_count_with_line_number() {
        let err = read_str("1.0 0 0 0\n1.0 0 0\n").unwrap_err();
        match err {
            TrimerFileError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, TrimerParseErrorKind::ColumnCount { found: 3 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let err = read_str("1.0 0 abc 0\n").unwrap_err();
        assert!(matches!(
            err,
            TrimerFileError::Parse {
                line: 1,
                kind: TrimerParseErrorKind::InvalidFloat { column: 3, .. }
            }
        ));
    }

    #[test]
    fn rejects_unknown_diameter() {
        let err = read_str("1.05 0 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            TrimerFileError::Parse {
                kind: TrimerParseErrorKind::UnknownDiameter { .. },
                ..
            }
        ));
    }

    #[test]
    fn written_snapshot_uses_unwrapped_positions_in_scientific_notation() {
        let cfg = Configuration::new(
            PeriodicBox::new(2.0),
            vec![Vector3::new(3.0, -0.5, 1.0)],
            vec![Diameter::Large],
        );
        let mut buffer = Vec::new();
        TrimerFile::write_to(&cfg, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1.10000000e+00 3.00000000e+00 -5.00000000e-01 1.00000000e+00\n"
        );
    }

    #[test]
    fn write_then_read_through_path_preserves_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg_1.xy");
        let cfg = Configuration::new(
            PeriodicBox::new(5.0),
            vec![Vector3::new(0.125, 6.5, -2.0), Vector3::new(1.0, 1.0, 1.0)],
            vec![Diameter::Small, Diameter::Medium],
        );
        TrimerFile::write_to_path(&cfg, &path).unwrap();
        let loaded = TrimerFile::read_from_path(&path).unwrap();
        assert_eq!(loaded.diameters, cfg.diameters());
        assert_eq!(loaded.positions, cfg.unwrapped_positions());
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempdir().unwrap();
        let result = TrimerFile::read_from_path(dir.path().join("missing.xy"));
        assert!(matches!(result, Err(TrimerFileError::Io(_))));
    }

    #[test]
    fn into_configuration_wraps_positions_into_the_box() {
        let snapshot = read_str("1.0 5.5 -0.5 2.0\n").unwrap();
        let cfg = snapshot.into_configuration(PeriodicBox::new(5.0));
        assert_eq!(*cfg.position(0), Vector3::new(0.5, 4.5, 2.0));
        assert_eq!(*cfg.unwrapped_position(0), Vector3::new(5.5, -0.5, 2.0));
    }
}
