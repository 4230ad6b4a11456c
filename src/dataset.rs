use std::fmt;

pub const DIMENSIONS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub index: usize,
    pub features: [f64; DIMENSIONS],
    pub label: String,
}

/// Ordered collection of standardized points; a point's `index` is its
/// position in the collection and identifies it during ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        debug_assert!(points
            .iter()
            .enumerate()
            .all(|(position, point)| point.index == position));

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Working copy for one search trial: every feature value in the masked
    /// dimensions is forced to zero, the original stays untouched.
    pub fn with_masked_dimensions(&self, mask: DimensionMask) -> Self {
        let mut working = self.clone();

        for point in &mut working.points {
            for dimension in mask.dimensions() {
                point.features[dimension] = 0.0;
            }
        }

        working
    }
}

/// Set of dimension indices to suppress before distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMask(u16);

impl DimensionMask {
    pub const EMPTY: Self = Self(0);

    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn single(dimension: usize) -> Self {
        Self(1 << dimension)
    }

    pub fn contains(self, dimension: usize) -> bool {
        self.0 & (1 << dimension) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn dimensions(self) -> impl Iterator<Item = usize> {
        (0..DIMENSIONS).filter(move |&dimension| self.contains(dimension))
    }
}

impl fmt::Display for DimensionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (count, dimension) in self.dimensions().enumerate() {
            if count > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dimension}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{DataPoint, Dataset, DIMENSIONS};

    /// Builds a dataset from (label, leading features) pairs, padding the
    /// remaining dimensions with zeros.
    pub fn dataset_from(rows: &[(&str, &[f64])]) -> Dataset {
        let points = rows
            .iter()
            .enumerate()
            .map(|(index, (label, values))| {
                let mut features = [0.0; DIMENSIONS];
                features[..values.len()].copy_from_slice(values);
                DataPoint {
                    index,
                    features,
                    label: (*label).to_string(),
                }
            })
            .collect();

        Dataset::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::dataset_from;
    use super::*;

    #[test]
    fn masking_zeroes_listed_dimensions_only() {
        let dataset = dataset_from(&[("a", &[1.0, 2.0, 3.0]), ("b", &[4.0, 5.0, 6.0])]);

        let masked = dataset.with_masked_dimensions(DimensionMask::from_bits(0b101));

        for (original, working) in dataset.points().iter().zip(masked.points()) {
            assert_eq!(working.features[0], 0.0);
            assert_eq!(working.features[1], original.features[1]);
            assert_eq!(working.features[2], 0.0);
            assert_eq!(working.label, original.label);
            assert_eq!(working.index, original.index);
        }
    }

    #[test]
    fn masking_leaves_the_original_untouched() {
        let dataset = dataset_from(&[("a", &[1.0, 2.0]), ("b", &[3.0, 4.0])]);
        let pristine = dataset.clone();

        let _ = dataset.with_masked_dimensions(DimensionMask::from_bits(0b11));

        assert_eq!(dataset, pristine);
    }

    #[test]
    fn mask_membership_and_display() {
        let mask = DimensionMask::from_bits(0b0010_0101);

        assert!(mask.contains(0));
        assert!(!mask.contains(1));
        assert!(mask.contains(2));
        assert!(mask.contains(5));
        assert_eq!(mask.to_string(), "{0, 2, 5}");
        assert_eq!(DimensionMask::EMPTY.to_string(), "{}");
        assert!(DimensionMask::EMPTY.is_empty());
        assert_eq!(DimensionMask::single(3), DimensionMask::from_bits(0b1000));
    }
}
