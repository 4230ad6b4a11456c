use std::fs::File;
use std::io::BufReader;

use csv::ReaderBuilder;

use crate::dataset::DIMENSIONS;
use crate::error::KnnError;

#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub features: [f64; DIMENSIONS],
    pub label: String,
}

/// Reads a space-delimited data file: one header line, then one row per
/// observation with eight numeric features followed by a label.
pub fn parse(file_path: &str) -> Result<Vec<RawObservation>, KnnError> {
    let file = File::open(file_path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b' ')
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut observations = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let line = row + 2; // one-based, after the header
        let record = result?;

        // runs of spaces produce empty fields
        let fields: Vec<&str> = record.iter().filter(|field| !field.is_empty()).collect();

        if fields.len() < DIMENSIONS + 1 {
            return Err(KnnError::MalformedRow {
                line,
                reason: format!(
                    "expected {} fields, found {}",
                    DIMENSIONS + 1,
                    fields.len()
                ),
            });
        }

        let mut features = [0.0; DIMENSIONS];
        for (dimension, field) in fields.iter().take(DIMENSIONS).enumerate() {
            features[dimension] = field.parse().map_err(|_| KnnError::MalformedRow {
                line,
                reason: format!("non-numeric feature value {field:?}"),
            })?;
        }

        observations.push(RawObservation {
            features,
            label: fields[DIMENSIONS].to_string(),
        });
    }

    Ok(observations)
}
