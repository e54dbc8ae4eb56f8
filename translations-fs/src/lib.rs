//! Capability-based UTF-8 file helpers for the translation tooling.
//!
//! The CLI reads attribute records and writes table exports through these
//! helpers so every path goes through `cap-std` directory handles.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read, Write};

/// Resolve the directory containing `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Read a whole UTF-8 file into a string.
///
/// # Errors
/// Propagates I/O failures and invalid UTF-8 content.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// # Errors
/// Propagates failures creating directories or writing the file.
pub fn write_utf8_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    let mut file = dir.create(name.as_str())?;
    file.write_all(contents)?;
    file.flush()
}

/// Return whether a path exists and is a regular file.
///
/// # Errors
/// Returns `NotFound` when the path or its parent is missing.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Propagates failures opening the base directory or creating the parents.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base_dir, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base_dir.create_dir_all(&relative)?;
    Ok(())
}

/// Split `parent` into the ambient directory it is anchored at and the path
/// below it. Relative paths are anchored at the working directory.
fn base_dir_and_relative(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut components = parent.components().peekable();
    let mut base = Utf8PathBuf::new();
    while let Some(anchor) = components.next_if(|component| {
        matches!(component, Utf8Component::Prefix(_) | Utf8Component::RootDir)
    }) {
        base.push(anchor);
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    let relative: Utf8PathBuf = components.collect();
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temporary directory")
    }

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path")
    }

    #[rstest]
    fn writes_into_missing_parents(temp_dir: TempDir) {
        let target = utf8(&temp_dir, "exports/2024/rules.json");
        write_utf8_file(&target, b"[]").expect("write export");
        assert_eq!(read_utf8_file(&target).expect("read export"), "[]");
        assert!(file_is_file(&target).expect("inspect export"));
    }

    #[rstest]
    fn directories_are_not_files(temp_dir: TempDir) {
        let dir = utf8(&temp_dir, "nested");
        std::fs::create_dir(dir.as_std_path()).expect("create dir");
        assert!(!file_is_file(&dir).expect("inspect dir"));
    }

    #[rstest]
    fn missing_files_report_not_found(temp_dir: TempDir) {
        let missing = utf8(&temp_dir, "missing.json");
        let err = file_is_file(&missing).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
