use crate::SimulationSnapshot;
use crate::tests::FIXTURE_CSV;

use googletest::prelude::*;
use tempfile::TempDir;
use ts_core::SafetyStatus;

fn fixture() -> SimulationSnapshot {
    SimulationSnapshot::from_reader(FIXTURE_CSV.as_bytes()).unwrap()
}

#[test]
fn given_fixture_when_tourist_ids_then_deduplicated_in_first_appearance_order() {
    // Given
    let snapshot = fixture();

    // When
    let ids = snapshot.tourist_ids();

    // Then
    assert_eq!(ids.normal, vec!["T1".to_string(), "T3".to_string()]);
    assert_eq!(ids.anomaly, vec!["T2".to_string()]);
}

#[test]
fn given_unknown_path_type_when_tourist_ids_then_ignored() {
    // Given
    let snapshot = fixture();

    // When
    let ids = snapshot.tourist_ids();

    // Then
    assert_that!(ids.normal.contains(&"T4".to_string()), eq(false));
    assert_that!(ids.anomaly.contains(&"T4".to_string()), eq(false));
}

#[test]
fn given_fixture_when_live_statuses_then_latest_row_per_tourist() {
    // Given
    let snapshot = fixture();

    // When
    let statuses = snapshot.live_statuses();

    // Then
    assert_that!(statuses.len(), eq(4));
    let t1 = &statuses["T1"];
    assert_that!(t1.lat, eq(26.92));
    assert_that!(t1.lon, eq(75.82));
    assert_that!(t1.status, eq(SafetyStatus::Normal));
    assert_that!(t1.username.as_str(), eq("asha"));
    assert_that!(statuses["T2"].status, eq(SafetyStatus::Anomaly));
    assert_that!(statuses["T2"].timestamp.as_str(), eq("2024-01-01T10:00:10"));
}

#[test]
fn given_status_column_when_live_statuses_then_status_column_wins() {
    // Given
    let csv = "tourist_id,path_type,lat,lon,status\nT9,normal,1.0,2.0,sos\n";
    let snapshot = SimulationSnapshot::from_reader(csv.as_bytes()).unwrap();

    // When
    let statuses = snapshot.live_statuses();

    // Then
    assert_that!(statuses["T9"].status, eq(SafetyStatus::Sos));
}

#[test]
fn given_row_without_coordinates_when_live_statuses_then_skipped() {
    // Given
    let csv = "tourist_id,path_type,lat,lon\nT1,normal,,\nT2,normal,1.5,2.5\n";
    let snapshot = SimulationSnapshot::from_reader(csv.as_bytes()).unwrap();

    // When
    let statuses = snapshot.live_statuses();

    // Then
    assert_that!(statuses.contains_key("T1"), eq(false));
    assert_that!(statuses.contains_key("T2"), eq(true));
}

#[test]
fn given_fixture_when_rows_then_raw_columns_preserved() {
    // Given
    let snapshot = fixture();

    // Then
    assert_that!(snapshot.len(), eq(6));
    assert_that!(snapshot.rows()[0]["tourist_id"].as_str(), eq("T1"));
    assert_that!(snapshot.rows()[5]["path_type"].as_str(), eq("detour"));
}

#[test]
fn given_missing_file_when_load_then_empty_snapshot() {
    // Given
    let temp = TempDir::new().unwrap();

    // When
    let snapshot = SimulationSnapshot::load(&temp.path().join("absent.csv")).unwrap();

    // Then
    assert_that!(snapshot.is_empty(), eq(true));
    assert_that!(snapshot.tourist_ids().is_empty(), eq(true));
}

#[test]
fn given_file_on_disk_when_load_then_rows_read() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("simulation_paths.csv");
    std::fs::write(&path, FIXTURE_CSV).unwrap();

    // When
    let snapshot = SimulationSnapshot::load(&path).unwrap();

    // Then
    assert_that!(snapshot.len(), eq(6));
}

#[test]
fn given_non_utf8_bytes_when_from_reader_then_rows_kept_with_replacement_char() {
    // Given
    let raw: &[u8] = b"tourist_id,path_type,lat,lon\nT1,normal,1,2\nT\xe9,normal,3,4\n";

    // When
    let snapshot = SimulationSnapshot::from_reader(raw).unwrap();

    // Then
    assert_that!(snapshot.len(), eq(2));
    assert_eq!(
        snapshot.tourist_ids().normal,
        vec!["T1".to_string(), "T\u{FFFD}".to_string()]
    );
    assert_that!(snapshot.live_statuses().len(), eq(2));
}
