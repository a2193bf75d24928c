//! Recursive file and directory copying.
//!
//! Files are read whole into memory and written out in one go; add-on scripts
//! and saved-variables files are small. A failure inside [`copy_dir`] aborts
//! the remaining entries of that tree and is returned to the caller, which
//! decides whether to carry on with the next item.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// Errors that can occur while copying
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    ListDir {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

/// What a copy call wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub bytes: u64,
}

impl CopyStats {
    fn absorb(&mut self, other: CopyStats) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.bytes += other.bytes;
    }
}

/// Copy a single file, overwriting `dst` if it exists.
///
/// The parent of `dst` must already exist. A write that fails part way may
/// leave `dst` truncated.
pub fn copy_file(src: &Utf8Path, dst: &Utf8Path) -> Result<CopyStats, CopyError> {
    let contents = fs::read(src).map_err(|source| CopyError::Read {
        path: src.to_path_buf(),
        source,
    })?;

    fs::write(dst, &contents).map_err(|source| CopyError::Write {
        path: dst.to_path_buf(),
        source,
    })?;

    tracing::debug!("Copied {} -> {} ({} bytes)", src, dst, contents.len());

    Ok(CopyStats {
        files: 1,
        dirs: 0,
        bytes: contents.len() as u64,
    })
}

/// Recursively copy the contents of `src` into `dst`.
///
/// `dst` and any missing ancestors are created; existing files under `dst`
/// are overwritten and files that only exist under `dst` are left alone.
/// Entries are visited in directory-listing order and the first failure is
/// returned immediately.
pub fn copy_dir(src: &Utf8Path, dst: &Utf8Path) -> Result<CopyStats, CopyError> {
    fs::create_dir_all(dst).map_err(|source| CopyError::CreateDir {
        path: dst.to_path_buf(),
        source,
    })?;

    let list_err = |source: std::io::Error| CopyError::ListDir {
        path: src.to_path_buf(),
        source,
    };

    let mut stats = CopyStats {
        dirs: 1,
        ..Default::default()
    };

    for entry in src.read_dir_utf8().map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_type = entry.file_type().map_err(list_err)?;

        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        let child = if file_type.is_dir() {
            copy_dir(src_path, &dst_path)?
        } else {
            copy_file(src_path, &dst_path)?
        };
        stats.absorb(child);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_temp_dir() -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_copy_file_overwrites() {
        let (_temp_dir, dir) = utf8_temp_dir();
        let src = dir.join("DBM.lua");
        let dst = dir.join("copy.lua");
        fs::write(&src, b"DBM_SavedOptions = {}").unwrap();
        fs::write(&dst, b"old contents that are longer than the new ones").unwrap();

        let stats = copy_file(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"DBM_SavedOptions = {}");
        assert_eq!(stats.files, 1);
        assert_eq!(stats.bytes, 21);
    }

    #[test]
    fn test_copy_file_missing_source() {
        let (_temp_dir, dir) = utf8_temp_dir();

        let err = copy_file(&dir.join("missing.lua"), &dir.join("out.lua")).unwrap_err();
        assert!(matches!(err, CopyError::Read { .. }));
        assert!(!dir.join("out.lua").exists());
    }

    #[test]
    fn test_copy_file_missing_parent() {
        let (_temp_dir, dir) = utf8_temp_dir();
        let src = dir.join("a.lua");
        fs::write(&src, b"x").unwrap();

        let err = copy_file(&src, &dir.join("no/such/dir/a.lua")).unwrap_err();
        assert!(matches!(err, CopyError::Write { .. }));
    }

    #[test]
    fn test_copy_dir_nested() {
        let (_temp_dir, dir) = utf8_temp_dir();
        let src = dir.join("WeakAuras");
        fs::create_dir_all(src.join("Media/Textures")).unwrap();
        fs::write(src.join("WeakAuras.toc"), b"## Title: WeakAuras").unwrap();
        fs::write(src.join("Media/Textures/square.tga"), [0u8, 1, 2, 3]).unwrap();
        fs::create_dir_all(src.join("Empty")).unwrap();

        let dst = dir.join("out/AddOns/WeakAuras");
        let stats = copy_dir(&src, &dst).unwrap();

        assert_eq!(fs::read(dst.join("WeakAuras.toc")).unwrap(), b"## Title: WeakAuras");
        assert_eq!(fs::read(dst.join("Media/Textures/square.tga")).unwrap(), [0u8, 1, 2, 3]);
        assert!(dst.join("Empty").is_dir());
        assert_eq!(stats.files, 2);
        assert_eq!(stats.dirs, 4);
    }

    #[test]
    fn test_copy_dir_is_idempotent_and_merges() {
        let (_temp_dir, dir) = utf8_temp_dir();
        let src = dir.join("src");
        let dst = dir.join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("a.lua"), b"new").unwrap();
        fs::write(dst.join("a.lua"), b"old").unwrap();
        fs::write(dst.join("keep.lua"), b"untouched").unwrap();

        copy_dir(&src, &dst).unwrap();
        copy_dir(&src, &dst).unwrap();

        assert_eq!(fs::read(dst.join("a.lua")).unwrap(), b"new");
        assert_eq!(fs::read(dst.join("keep.lua")).unwrap(), b"untouched");
    }

    #[test]
    fn test_copy_dir_missing_source() {
        let (_temp_dir, dir) = utf8_temp_dir();

        let err = copy_dir(&dir.join("nope"), &dir.join("dst")).unwrap_err();
        assert!(matches!(err, CopyError::ListDir { .. }));
    }

    #[test]
    fn test_copy_dir_aborts_on_child_failure() {
        let (_temp_dir, dir) = utf8_temp_dir();
        let src = dir.join("src");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("sub/file.lua"), b"x").unwrap();

        // A plain file where the copier needs a directory
        let dst = dir.join("dst");
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("sub"), b"in the way").unwrap();

        let err = copy_dir(&src, &dst).unwrap_err();
        assert!(matches!(err, CopyError::CreateDir { .. }));
    }
}
