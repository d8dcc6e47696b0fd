// Persistence behaviour across process restarts: round trips, tolerance of
// bad files, and grid invariants over several configurations.

mod common;

use std::collections::HashSet;
use std::fs;

use common::{data_path, open_hall, FileHall};
use seatbook::{GridConfig, Point, Seat};
use tempfile::TempDir;

const CONFIGS: [(usize, usize); 5] = [(1, 1), (1, 5), (4, 1), (3, 4), (8, 12)];

#[test]
fn test_grid_positions_are_unique_for_all_configs() {
    for (rows, cols) in CONFIGS {
        let fixture = FileHall::new(GridConfig::new(rows, cols));
        let seats = fixture.hall.seats();
        assert_eq!(seats.len(), rows * cols);

        let positions: HashSet<(usize, usize)> = seats.iter().map(Seat::position).collect();
        assert_eq!(positions.len(), rows * cols, "duplicate seat in {}x{}", rows, cols);
        assert!(positions.iter().all(|(r, c)| *r < rows && *c < cols));
    }
}

#[test]
fn test_center_is_inside_and_just_beyond_radius_is_outside() {
    for (rows, cols) in CONFIGS {
        let fixture = FileHall::new(GridConfig::new(rows, cols));
        for seat in fixture.hall.seats() {
            let c = seat.center();
            assert!(seat.contains(c));
            let eps = 1e-6;
            for (dx, dy) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
                let beyond = Point::new(c.x + dx * (seat.radius() + eps), c.y + dy * (seat.radius() + eps));
                assert!(!seat.contains(beyond));
            }
        }
    }
}

#[test]
fn test_round_trip_reproduces_every_seat() {
    let mut fixture = FileHall::new(GridConfig::new(3, 4));
    // Book a diagonal-ish pattern.
    for (row, col) in [(0, 0), (1, 2), (2, 3), (2, 1)] {
        let point = fixture.center(row, col);
        fixture.hall.toggle_at(point).unwrap();
    }

    let reopened = fixture.reopen();
    for (original, restored) in fixture.hall.seats().iter().zip(reopened.seats()) {
        assert_eq!(original.position(), restored.position());
        assert_eq!(original.is_booked(), restored.is_booked());
    }
    assert_eq!(reopened.counts().sold, 4);
}

#[test]
fn test_explicit_save_then_load() {
    let mut fixture = FileHall::new(GridConfig::new(2, 3));
    let point = fixture.center(1, 2);
    fixture.hall.toggle_at(point).unwrap();
    fixture.hall.save().unwrap();

    let mut other = open_hall(GridConfig::new(2, 3), &fixture.path());
    other.load();
    assert_eq!(other.snapshot(), fixture.hall.snapshot());
}

#[test]
fn test_non_json_file_leaves_all_seats_free() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(&path, "this is not json {{{").unwrap();

    let hall = open_hall(GridConfig::new(2, 2), &path);
    assert!(hall.seats().iter().all(|s| !s.is_booked()));
}

#[test]
fn test_wrong_shape_file_leaves_all_seats_free() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);

    for body in [r#"[{"row": 0, "col": 0, "booked": true}]"#, r#"{"seats": "all"}"#, "42", ""] {
        fs::write(&path, body).unwrap();
        let hall = open_hall(GridConfig::new(2, 2), &path);
        assert_eq!(hall.counts().sold, 0, "body {:?}", body);
    }
}

#[test]
fn test_malformed_file_is_replaced_on_next_change() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(&path, "garbage").unwrap();

    let mut hall = open_hall(GridConfig::new(2, 2), &path);
    let point = hall.seat(0, 0).unwrap().center();
    hall.toggle_at(point).unwrap();

    let reopened = open_hall(GridConfig::new(2, 2), &path);
    assert!(reopened.seat(0, 0).unwrap().is_booked());
}

#[test]
fn test_out_of_bounds_and_unknown_fields_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(
        &path,
        r#"{
            "venue": "Hall 3",
            "seats": [
                {"row": 0, "col": 1, "booked": true, "note": "aisle"},
                {"row": 9, "col": 9, "booked": true},
                {"row": 1, "col": 0, "booked": "maybe"},
                {"row": 1}
            ]
        }"#,
    )
    .unwrap();

    let hall = open_hall(GridConfig::new(2, 2), &path);
    assert!(hall.seat(0, 1).unwrap().is_booked());
    assert!(!hall.seat(1, 0).unwrap().is_booked());
    assert_eq!(hall.counts().sold, 1);
}

#[test]
fn test_smaller_grid_ignores_bookings_outside_it() {
    let mut big = FileHall::new(GridConfig::new(3, 3));
    for (row, col) in [(0, 0), (2, 2)] {
        let point = big.center(row, col);
        big.hall.toggle_at(point).unwrap();
    }

    let small = open_hall(GridConfig::new(2, 2), &big.path());
    assert!(small.seat(0, 0).unwrap().is_booked());
    assert_eq!(small.counts().sold, 1);
}

#[test]
fn test_failed_save_rolls_back_and_keeps_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    // Data file under a regular file: every save fails.
    let mut hall = open_hall(GridConfig::new(2, 2), &blocker.join("seats.json"));
    let point = hall.seat(1, 1).unwrap().center();

    assert!(hall.toggle_at(point).is_err());
    assert!(!hall.seat(1, 1).unwrap().is_booked());
    assert!(hall.reset_all().is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}
