use std::fs;
use std::path::Path;

use crate::data::dataset::Dataset;
use crate::error::{Error, Result};

/// Loads a delimited numeric dataset from `path`.
///
/// Each line is split on `;` when one is present, otherwise on `,`; the
/// last `output_cols` fields form the target vector and the rest the
/// features. Blank lines are skipped, and every row must carry the same
/// number of fields as the first.
pub fn load_csv(path: impl AsRef<Path>, output_cols: usize) -> Result<Dataset> {
    let path = path.as_ref().display().to_string();

    let text = fs::read_to_string(&path).map_err(|_| Error::FileNotFound { path: path.clone() })?;

    let mut features: Vec<Vec<f64>> = Vec::new();
    let mut targets: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let delimiter = if line.contains(';') { ';' } else { ',' };
        let fields: Vec<&str> = line.split(delimiter).collect();

        if fields.len() <= output_cols {
            return Err(Error::ParseError {
                path,
                line: idx + 1,
                reason: format!(
                    "expected more than {} fields, got {}",
                    output_cols,
                    fields.len()
                ),
            });
        }

        match width {
            None => width = Some(fields.len()),
            Some(w) if fields.len() != w => {
                return Err(Error::ParseError {
                    path,
                    line: idx + 1,
                    reason: format!("expected {} fields, got {}", w, fields.len()),
                });
            }
            Some(_) => {}
        }

        let mut row = Vec::with_capacity(fields.len());
        for field in &fields {
            let value: f64 = field.trim().parse().map_err(|_| Error::ParseError {
                path: path.clone(),
                line: idx + 1,
                reason: format!("'{}' is not a number", field.trim()),
            })?;
            row.push(value);
        }

        let split = row.len() - output_cols;
        targets.push(row.split_off(split));
        features.push(row);
    }

    if features.is_empty() {
        return Err(Error::ParseError {
            path,
            line: 0,
            reason: "no data rows".into(),
        });
    }

    Ok(Dataset::new(features, targets))
}
