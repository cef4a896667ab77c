//! Coordinates file parsing.
//!
//! One `x,y` coordinate per line, comma or whitespace separated. The first
//! line is the warehouse origin; the remaining lines are pick locations,
//! indexed 0..L−1 in file order. Blank lines and `#` comments are skipped.

use std::fs;
use std::path::Path;

use crate::distance::DistanceModel;
use crate::error::{BatchingError, Result};

/// Parses coordinates data into a Euclidean distance model.
///
/// # Examples
///
/// ```
/// use pickbatch::io::parse_coordinates;
///
/// let model = parse_coordinates("0,0\n3,4\n0,8\n").expect("valid data");
/// assert_eq!(model.num_locations(), 2);
/// assert!((model.from_origin(0) - 5.0).abs() < 1e-10);
/// ```
pub fn parse_coordinates(input: &str) -> Result<DistanceModel> {
    let mut points = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty());

        let x = parse_field(fields.next(), index + 1, "x coordinate")?;
        let y = parse_field(fields.next(), index + 1, "y coordinate")?;
        points.push((x, y));
    }

    if points.len() < 2 {
        return Err(BatchingError::Input(
            "coordinates file must list the origin and at least one pick location".into(),
        ));
    }
    Ok(DistanceModel::from_points(points[0], &points[1..]))
}

/// Reads and parses a coordinates file.
pub fn read_coordinates_file(path: &Path) -> Result<DistanceModel> {
    let content = fs::read_to_string(path)?;
    parse_coordinates(&content)
}

fn parse_field(field: Option<&str>, line: usize, name: &str) -> Result<f64> {
    let field = field.ok_or_else(|| {
        BatchingError::Input(format!("coordinates file line {line}: missing {name}"))
    })?;
    field.parse().map_err(|_| {
        BatchingError::Input(format!(
            "coordinates file line {line}: invalid {name} '{field}'"
        ))
    })
}
