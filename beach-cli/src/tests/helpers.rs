//! Test helpers for writing saved payloads into a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const FORECAST_JSON: &str = r#"{
  "timezone": "Europe/Rome",
  "current": {
    "time": "2024-07-01T14:00",
    "temperature_2m": 27.4,
    "weather_code": 1,
    "wind_speed_10m": 9.7,
    "wind_direction_10m": 225,
    "uv_index": 7.25
  },
  "daily": {
    "time": ["2024-07-01", "2024-07-02", "2024-07-03"],
    "weather_code": [1, 3, 95],
    "temperature_2m_max": [29.1, 24.3, 21.0],
    "temperature_2m_min": [21.6, 19.8, 17.2],
    "uv_index_max": [7.9, 5.1, 3.0],
    "wind_speed_10m_max": [14.2, 21.5, 38.0],
    "sunrise": ["2024-07-01T05:36", "2024-07-02T05:37", "2024-07-03T05:37"],
    "sunset": ["2024-07-01T20:38", "2024-07-02T20:38", "2024-07-03T20:38"]
  }
}"#;

pub(super) const MARINE_JSON: &str = r#"{
  "current": {"time": "2024-07-01T14:00", "wave_height": 0.3, "wave_period": 5.2},
  "hourly": {
    "time": ["2024-07-01T12:00", "2024-07-02T12:00", "2024-07-03T12:00"],
    "wave_height": [0.4, 0.9, 1.9]
  }
}"#;

pub(super) const MARINE_ERROR_JSON: &str =
    r#"{"error": true, "reason": "No data is available for this location"}"#;

/// Temporary directory with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write file");
}
