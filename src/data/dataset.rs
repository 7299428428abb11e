/// An in-memory supervised dataset: one feature row and one target row
/// per sample. Normalization rescales values in place; the row and
/// column counts never change after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
}

impl Dataset {
    /// # Panics
    /// Panics if the two sides differ in length, the dataset is empty,
    /// or the rows are not rectangular.
    pub fn new(features: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Dataset {
        assert!(!features.is_empty(), "dataset must not be empty");
        assert_eq!(features.len(), targets.len(), "features and targets must have equal length");

        let input_size = features[0].len();
        let output_size = targets[0].len();
        assert!(
            features.iter().all(|row| row.len() == input_size),
            "feature rows must share one width"
        );
        assert!(
            targets.iter().all(|row| row.len() == output_size),
            "target rows must share one width"
        );

        Dataset { features, targets }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature width.
    pub fn input_size(&self) -> usize {
        self.features[0].len()
    }

    /// Target width.
    pub fn output_size(&self) -> usize {
        self.targets[0].len()
    }
}
