// tests/common/helpers.rs
//! Test helper functions with descriptive panics.

use std::{fs, path::Path};

/// Read a whole file as bytes.
///
/// # Panics
///
/// Panics with a descriptive message if the file cannot be read.
pub fn read_bytes(path: &Path) -> Vec<u8> {
    fs::read(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Build a log with `starts` lines containing `start` and `ends` lines containing
/// `end`, separated by noise lines.
#[allow(dead_code)]
pub fn synthetic_log(start: &str, starts: usize, end: &str, ends: usize) -> String {
    let mut log = String::new();
    for i in 0..starts.max(ends) {
        log.push_str(&format!("[{i:05}] noise line\n"));
        if i < starts {
            log.push_str(&format!("[{i:05}] job {start} id={i}\n"));
        }
        if i < ends {
            log.push_str(&format!("[{i:05}] job {end} id={i}\n"));
        }
    }
    log
}
