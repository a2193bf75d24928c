//! Fixtures shared by the integration tests: a throwaway installation tree and
//! a byte-level snapshot of a directory.

#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use wowkeep::paths::MARKER_FILE;

/// Empty installation root containing only the marker file
pub fn install_root() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    fs::write(root.join(MARKER_FILE), b"").unwrap();
    (temp_dir, root)
}

pub fn write_file(path: &Utf8Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Every file and directory under `dir`, keyed by relative path.
/// Directories map to `None`, files to their contents.
pub fn snapshot(dir: &Utf8Path) -> BTreeMap<String, Option<Vec<u8>>> {
    let mut entries = BTreeMap::new();
    if dir.exists() {
        collect(dir, dir, &mut entries);
    }
    entries
}

fn collect(base: &Utf8Path, dir: &Utf8Path, entries: &mut BTreeMap<String, Option<Vec<u8>>>) {
    for entry in dir.read_dir_utf8().unwrap() {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(base).unwrap().as_str().replace('\\', "/");
        if entry.file_type().unwrap().is_dir() {
            entries.insert(rel, None);
            collect(base, entry.path(), entries);
        } else {
            entries.insert(rel, Some(fs::read(entry.path()).unwrap()));
        }
    }
}
