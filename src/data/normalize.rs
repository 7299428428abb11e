use serde::{Serialize, Deserialize};

use crate::data::dataset::Dataset;

/// Transformation applied to the dataset before training. Exactly one
/// policy is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    #[default]
    None,
    /// Divide features and targets by a power of ten chosen from the
    /// largest feature value; inverted on prediction.
    AutoRescale,
    /// (x - min) / (max - min) over the features.
    MinMax,
    /// (x - mean) / stddev over the flattened features.
    ZScore,
    /// (x - min) / (max - mean) over the features.
    Mean,
}

/// Power-of-ten rescaling recorded at training time. Once active, every
/// prediction input is divided by `10^log10_factor` and every output
/// multiplied back by it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rescaling {
    pub active: bool,
    pub log10_factor: i32,
}

impl Rescaling {
    pub fn factor(&self) -> f64 {
        10f64.powi(self.log10_factor)
    }
}

/// Applies `policy` to `dataset` in place. The returned rescaling state
/// is inactive for every policy except `AutoRescale`.
pub fn apply(policy: Normalization, dataset: &mut Dataset) -> Rescaling {
    match policy {
        Normalization::None => Rescaling::default(),
        Normalization::AutoRescale => check_magnitude(dataset),
        Normalization::MinMax => {
            min_max(dataset);
            Rescaling::default()
        }
        Normalization::ZScore => {
            z_score(dataset);
            Rescaling::default()
        }
        Normalization::Mean => {
            mean(dataset);
            Rescaling::default()
        }
    }
}

/// Scans the feature magnitude and rescales by a power of ten when the
/// largest value reaches double digits.
pub fn check_magnitude(dataset: &mut Dataset) -> Rescaling {
    let stats = feature_stats(dataset);
    if stats.max <= 0.0 {
        return Rescaling::default();
    }

    let log = stats.max.log10().floor() as i32;
    if log >= 1 {
        rescale(dataset, log);
        return Rescaling {
            active: true,
            log10_factor: log,
        };
    }

    Rescaling::default()
}

/// Divides every feature and every target value by `10^log`.
pub fn rescale(dataset: &mut Dataset, log: i32) {
    log::info!("rescaling features and targets by 1e{}", log);
    let factor = 10f64.powi(log);

    for row in dataset.features.iter_mut().chain(dataset.targets.iter_mut()) {
        for value in row {
            *value /= factor;
        }
    }
}

/// Min-max normalization of the features: (x - min) / (max - min).
pub fn min_max(dataset: &mut Dataset) {
    let stats = feature_stats(dataset);
    let diff = stats.max - stats.min;
    for_each_feature(dataset, |x| (x - stats.min) / diff);
}

/// Z-score normalization of the features, with mean and standard
/// deviation taken over the flattened dataset.
pub fn z_score(dataset: &mut Dataset) {
    let stats = feature_stats(dataset);
    let count = (dataset.len() * dataset.input_size()) as f64;

    let mut variance = 0.0;
    for row in &dataset.features {
        for value in row {
            variance += (value - stats.mean).powi(2) / count;
        }
    }
    let sigma = variance.sqrt();

    for_each_feature(dataset, |x| (x - stats.mean) / sigma);
}

/// Mean normalization of the features: (x - min) / (max - mean).
pub fn mean(dataset: &mut Dataset) {
    let stats = feature_stats(dataset);
    for_each_feature(dataset, |x| (x - stats.min) / (stats.max - stats.mean));
}

struct FeatureStats {
    min: f64,
    max: f64,
    mean: f64,
}

fn feature_stats(dataset: &Dataset) -> FeatureStats {
    let mut min = dataset.features[0][0];
    let mut max = min;
    let mut sum = 0.0;
    let count = (dataset.len() * dataset.input_size()) as f64;

    for row in &dataset.features {
        for &value in row {
            if value > max {
                max = value;
            }
            if value < min {
                min = value;
            }
            sum += value;
        }
    }

    FeatureStats {
        min,
        max,
        mean: sum / count,
    }
}

fn for_each_feature(dataset: &mut Dataset, f: impl Fn(f64) -> f64) {
    for row in dataset.features.iter_mut() {
        for value in row {
            *value = f(*value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Dataset;

    #[test]
    fn three_digit_magnitude_rescales_by_a_hundred() {
        let mut ds = Dataset::new(
            vec![vec![150.0, 20.0], vec![30.0, 40.0]],
            vec![vec![100.0], vec![50.0]],
        );
        let r = check_magnitude(&mut ds);
        assert!(r.active);
        assert_eq!(r.log10_factor, 2);
        assert_eq!(ds.features[0], vec![1.5, 0.2]);
        assert_eq!(ds.targets, vec![vec![1.0], vec![0.5]]);
    }

    #[test]
    fn single_digit_magnitude_is_left_alone() {
        let mut ds = Dataset::new(vec![vec![9.0, 1.0]], vec![vec![2.0]]);
        let r = check_magnitude(&mut ds);
        assert!(!r.active);
        assert_eq!(ds.features[0], vec![9.0, 1.0]);
        assert_eq!(ds.targets[0], vec![2.0]);
    }

    #[test]
    fn min_max_maps_features_into_the_unit_interval() {
        let mut ds = Dataset::new(
            vec![vec![0.0, 5.0], vec![10.0, 2.5]],
            vec![vec![1.0], vec![2.0]],
        );
        min_max(&mut ds);
        assert_eq!(ds.features[0], vec![0.0, 0.5]);
        assert_eq!(ds.features[1], vec![1.0, 0.25]);
        // targets are untouched by policies other than rescaling
        assert_eq!(ds.targets, vec![vec![1.0], vec![2.0]]);
    }

    #[test]
    fn z_score_centers_the_features() {
        let mut ds = Dataset::new(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![vec![0.0], vec![0.0]],
        );
        z_score(&mut ds);
        let total: f64 = ds.features.iter().flatten().sum();
        assert!(total.abs() < 1e-12);
    }
}
