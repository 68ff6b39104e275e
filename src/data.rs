//! Training/test data handed through to the objective evaluator.
//!
//! The optimizer never looks inside the matrices; it only checks that they
//! are well-formed before a run starts.

use crate::error::InputError;

/// Validated train/test partitions.
///
/// Features are row-major: one `Vec<f64>` per sample. Labels are class
/// indices, one per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitData {
    x_train: Vec<Vec<f64>>,
    y_train: Vec<usize>,
    x_test: Vec<Vec<f64>>,
    y_test: Vec<usize>,
}

impl SplitData {
    /// Builds a split, rejecting malformed data.
    ///
    /// # Errors
    ///
    /// - [`InputError::EmptyPartition`] if either partition has no rows
    /// - [`InputError::SampleCountMismatch`] if a features/labels pair disagree
    /// - [`InputError::RaggedFeatures`] if a matrix is not rectangular
    /// - [`InputError::FeatureWidthMismatch`] if train and test column counts differ
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mfo::SplitData;
    ///
    /// let x = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    /// let y = vec![0, 1];
    /// let data = SplitData::new(x.clone(), y.clone(), x, y).unwrap();
    /// assert_eq!(data.n_features(), 2);
    ///
    /// assert!(SplitData::new(vec![vec![0.0]], vec![0, 1], vec![vec![0.0]], vec![0]).is_err());
    /// ```
    pub fn new(
        x_train: Vec<Vec<f64>>,
        y_train: Vec<usize>,
        x_test: Vec<Vec<f64>>,
        y_test: Vec<usize>,
    ) -> Result<Self, InputError> {
        let train_width = check_partition("train", &x_train, &y_train)?;
        let test_width = check_partition("test", &x_test, &y_test)?;
        if train_width != test_width {
            return Err(InputError::FeatureWidthMismatch {
                train: train_width,
                test: test_width,
            });
        }
        Ok(Self {
            x_train,
            y_train,
            x_test,
            y_test,
        })
    }

    pub fn x_train(&self) -> &[Vec<f64>] {
        &self.x_train
    }

    pub fn y_train(&self) -> &[usize] {
        &self.y_train
    }

    pub fn x_test(&self) -> &[Vec<f64>] {
        &self.x_test
    }

    pub fn y_test(&self) -> &[usize] {
        &self.y_test
    }

    /// Number of feature columns (shared by both partitions).
    pub fn n_features(&self) -> usize {
        self.x_train.first().map_or(0, Vec::len)
    }
}

/// Checks one features/labels pair and returns its column count.
fn check_partition(
    partition: &'static str,
    features: &[Vec<f64>],
    labels: &[usize],
) -> Result<usize, InputError> {
    if features.len() != labels.len() {
        return Err(InputError::SampleCountMismatch {
            partition,
            features: features.len(),
            labels: labels.len(),
        });
    }
    let Some(first) = features.first() else {
        return Err(InputError::EmptyPartition(partition));
    };
    let expected = first.len();
    for (row, values) in features.iter().enumerate() {
        if values.len() != expected {
            return Err(InputError::RaggedFeatures {
                partition,
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok(expected)
}
