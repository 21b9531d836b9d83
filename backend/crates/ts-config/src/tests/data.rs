use crate::DataConfig;

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_defaults_when_validate_then_ok() {
    // Given
    let data = DataConfig::default();

    // When
    let result = data.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_empty_users_file_when_validate_then_error() {
    // Given
    let data = DataConfig {
        users_file: String::new(),
        ..DataConfig::default()
    };

    // When
    let result = data.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_blank_frontend_dir_when_validate_then_error() {
    // Given
    let data = DataConfig {
        frontend_dir: String::from("   "),
        ..DataConfig::default()
    };

    // When
    let result = data.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_relative_paths_when_path_accessors_then_unchanged() {
    // Given
    let data = DataConfig::default();

    // Then
    assert_that!(
        data.simulation_csv_path(),
        eq(&PathBuf::from("simulation_paths.csv"))
    );
    assert_that!(data.frontend_path(), eq(&PathBuf::from("live-dashboard/out")));
}
