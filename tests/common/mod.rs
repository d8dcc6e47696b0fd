//! Common test utilities for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use seatbook::{GridConfig, Hall, JsonFileStore, Point, ViewportConfig};
use serde_json::Value;
use tempfile::TempDir;

/// A hall backed by a JSON file inside a temp dir that lives as long as the fixture.
pub struct FileHall {
    pub dir: TempDir,
    pub hall: Hall<JsonFileStore>,
}

impl FileHall {
    pub fn new(grid: GridConfig) -> Self {
        let dir = TempDir::new().unwrap();
        let hall = open_hall(grid, &data_path(&dir));
        Self { dir, hall }
    }

    pub fn path(&self) -> PathBuf {
        data_path(&self.dir)
    }

    pub fn center(&self, row: usize, col: usize) -> Point {
        self.hall.seat(row, col).unwrap().center()
    }

    /// Fresh hall with the same grid reading the same file.
    pub fn reopen(&self) -> Hall<JsonFileStore> {
        open_hall(self.hall.grid().clone(), &self.path())
    }
}

pub fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("seats.json")
}

pub fn open_hall(grid: GridConfig, path: &Path) -> Hall<JsonFileStore> {
    let (hall, _) = Hall::open(grid, ViewportConfig::default(), JsonFileStore::new(path)).unwrap();
    hall
}

/// `(row, col, booked)` triples from the file on disk, in file order.
pub fn read_entries(path: &Path) -> Vec<(u64, u64, bool)> {
    let text = fs::read_to_string(path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    value["seats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            (
                entry["row"].as_u64().unwrap(),
                entry["col"].as_u64().unwrap(),
                entry["booked"].as_bool().unwrap(),
            )
        })
        .collect()
}

pub fn booked_on_disk(path: &Path) -> usize {
    read_entries(path).iter().filter(|(_, _, booked)| *booked).count()
}
