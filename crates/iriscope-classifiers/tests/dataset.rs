//! Integration tests for the bundled reference dataset.

use iriscope_classifiers::dataset::{self, FEATURE_NAMES, NUM_CLASSES, TARGET_NAMES};

#[test]
fn load_parses_the_full_table() {
    let data = dataset::load().unwrap();
    assert_eq!(data.x.shape(), (150, FEATURE_NAMES.len()));
    assert_eq!(data.y.len(), 150);
    assert_eq!(data.n_samples(), 150);
}

#[test]
fn fifty_samples_per_class() {
    let data = dataset::load().unwrap();
    assert_eq!(data.class_counts(), [50, 50, 50]);
}

#[test]
fn labels_are_in_range() {
    let data = dataset::load().unwrap();
    for &label in data.y.iter() {
        assert!(label < NUM_CLASSES);
    }
}

#[test]
fn measurements_are_positive_and_finite() {
    let data = dataset::load().unwrap();
    for &value in data.x.as_slice() {
        assert!(value.is_finite());
        assert!(value > 0.0);
    }
}

#[test]
fn load_is_memoized() {
    let first = dataset::load().unwrap();
    let second = dataset::load().unwrap();
    assert!(std::ptr::eq(first, second), "load should return the cached dataset");
}

#[test]
fn target_names_are_three_species() {
    assert_eq!(TARGET_NAMES.len(), 3);
    assert_eq!(dataset::target_names(), &["setosa", "versicolor", "virginica"]);
}

#[test]
fn feature_means_match_the_reference_table() {
    let data = dataset::load().unwrap();
    let means = data.feature_means();
    // Known column means of the 150-row table
    assert!((means[0] - 5.84).abs() < 0.05, "sepal_length mean {}", means[0]);
    assert!((means[1] - 3.06).abs() < 0.05, "sepal_width mean {}", means[1]);
    assert!((means[2] - 3.76).abs() < 0.05, "petal_length mean {}", means[2]);
    assert!((means[3] - 1.20).abs() < 0.05, "petal_width mean {}", means[3]);
}
