use ndarray::{Array1, Array2, Axis};

use crate::dataset::{DataPoint, Dataset, DIMENSIONS};
use crate::error::KnnError;
use crate::parse::RawObservation;

/// Per-dimension mean and sample standard deviation fitted over a batch of
/// raw observations, used to z-score every feature value.
#[derive(Debug, Clone)]
pub struct FeatureScaler {
    means: Array1<f64>,
    std_devs: Array1<f64>,
}

impl FeatureScaler {
    pub fn fit(observations: &[RawObservation]) -> Result<Self, KnnError> {
        if observations.len() < 2 {
            return Err(KnnError::InsufficientData {
                required: 2,
                available: observations.len(),
            });
        }

        let mut columns = Array2::zeros((observations.len(), DIMENSIONS));
        for (row, observation) in observations.iter().enumerate() {
            for (col, &value) in observation.features.iter().enumerate() {
                columns[(row, col)] = value;
            }
        }

        let means = columns.sum_axis(Axis(0)) / observations.len() as f64;
        // sample standard deviation, N - 1 divisor
        let std_devs = columns.std_axis(Axis(0), 1.0);

        Ok(Self { means, std_devs })
    }

    pub fn means(&self) -> &Array1<f64> {
        &self.means
    }

    pub fn std_devs(&self) -> &Array1<f64> {
        &self.std_devs
    }

    /// A zero-variance dimension standardizes to non-finite values. The
    /// transform does not fail on it; callers that want to guard call this
    /// first.
    pub fn ensure_no_degenerate_dimensions(&self) -> Result<(), KnnError> {
        for (dimension, &std_dev) in self.std_devs.iter().enumerate() {
            if std_dev == 0.0 {
                return Err(KnnError::DegenerateDimension { dimension });
            }
        }

        Ok(())
    }

    pub fn transform(&self, observations: &[RawObservation]) -> Dataset {
        let points = observations
            .iter()
            .enumerate()
            .map(|(index, observation)| {
                let mut features = [0.0; DIMENSIONS];
                for (dimension, &value) in observation.features.iter().enumerate() {
                    features[dimension] =
                        (value - self.means[dimension]) / self.std_devs[dimension];
                }

                DataPoint {
                    index,
                    features,
                    label: observation.label.clone(),
                }
            })
            .collect();

        Dataset::new(points)
    }
}

pub fn standardize(observations: &[RawObservation]) -> Result<Dataset, KnnError> {
    let scaler = FeatureScaler::fit(observations)?;
    Ok(scaler.transform(observations))
}
