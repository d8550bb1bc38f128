#![allow(deprecated)]

use std::sync::Mutex;

use log::{Log, Metadata, Record};
use ndarray::array;

use reframe::geo_3d;

/// Logger keeping every warning so the tests can look at them.
struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

static LOGGER: CaptureLogger = CaptureLogger{records: Mutex::new(Vec::new())};

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push(format!("{}: {}", record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

fn install() {
    // Every test in this binary shares the logger
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Warn);
}

fn warnings_about(alias: &str) -> Vec<String> {
    LOGGER.records.lock().unwrap()
        .iter()
        .filter(|record| record.contains(alias))
        .cloned()
        .collect()
}

#[test]
fn test_rotation_matrix_alias_warns_and_forwards() {
    install();
    let v0 = [1.0, 0.0, 0.0];
    let v1 = [0.0, 0.0, 2.0];

    let old = geo_3d::rotationMatrixFromNormals(&v0, &v1).unwrap();
    let new = geo_3d::rotation_matrix_from_normals(&v0, &v1).unwrap();
    assert_eq!(old, new);

    let warnings = warnings_about("rotationMatrixFromNormals");
    assert!(!warnings.is_empty());
    assert!(warnings[0].starts_with("reframe::deprecation: "));
    assert!(warnings[0].contains("rotation_matrix_from_normals"));
    assert!(warnings[0].contains("1.0.0"));
}

#[test]
fn test_rotate_points_alias_warns_and_forwards() {
    install();
    let xyz = array![[1.0, 2.0, 3.0], [-1.0, 0.5, 0.0]];
    let v0 = [0.0, 0.0, 1.0];
    let v1 = [0.0, 1.0, 1.0];
    let x0 = [0.5, 0.5, 0.5];

    let old = geo_3d::rotatePointsFromNormals(xyz.view(), &v0, &v1, Some(&x0)).unwrap();
    let new = geo_3d::rotate_points_from_normals(xyz.view(), &v0, &v1, Some(&x0)).unwrap();
    assert_eq!(old, new);

    let warnings = warnings_about("rotatePointsFromNormals");
    assert!(!warnings.is_empty());
    assert!(warnings[0].contains("rotate_points_from_normals"));
    assert!(warnings[0].contains("1.0.0"));
}

#[test]
fn test_alias_errors_match() {
    install();
    let xyz = array![[1.0, 2.0, 3.0]];
    let old = geo_3d::rotatePointsFromNormals(xyz.view(), &[1.0, 0.0], &[0.0, 1.0, 0.0], None);
    let new = geo_3d::rotate_points_from_normals(xyz.view(), &[1.0, 0.0], &[0.0, 1.0, 0.0], None);
    assert_eq!(old.unwrap_err(), new.unwrap_err());
}

#[test]
fn test_short_aliases_are_the_same_functions() {
    let grid = array![[1.0, std::f64::consts::FRAC_PI_2, 5.0]];
    assert_eq!(
        geo_3d::cyl2cart(grid.view(), None).unwrap(),
        geo_3d::cylindrical_to_cartesian(grid.view(), None).unwrap(),
    );
    let xyz = array![[0.0, 1.0, 5.0]];
    assert_eq!(
        geo_3d::cart2cyl(xyz.view(), None).unwrap(),
        geo_3d::cartesian_to_cylindrical(xyz.view(), None).unwrap(),
    );
}
