//! Recursive directory copy with overwrite semantics.

use std::fs;
use std::path::Path;

use crate::FileOpsError;

/// Copies `src` into `dst`, creating `dst` if needed.
///
/// Files at the current level are copied first (replacing existing ones),
/// then each subdirectory is copied recursively. Returns the number of files
/// copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<u64, FileOpsError> {
    if !src.is_dir() {
        return Err(FileOpsError::NotFound(src.to_path_buf()));
    }

    fs::create_dir_all(dst).map_err(|e| FileOpsError::io(dst, e))?;

    let mut subdirs = Vec::new();
    let mut copied = 0u64;

    let entries = fs::read_dir(src).map_err(|e| FileOpsError::io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FileOpsError::io(src, e))?;
        let file_type = entry.file_type().map_err(|e| FileOpsError::io(entry.path(), e))?;
        let target = dst.join(entry.file_name());

        if file_type.is_dir() {
            subdirs.push((entry.path(), target));
        } else {
            fs::copy(entry.path(), &target).map_err(|e| FileOpsError::io(&target, e))?;
            copied += 1;
        }
    }

    for (sub_src, sub_dst) in subdirs {
        copied += copy_dir_recursive(&sub_src, &sub_dst)?;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn copies_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src").join("update");
        write(&src.join("a.txt"), b"a");
        write(&src.join("sub").join("b.txt"), b"b");

        let dst = tmp.path().join("game").join("update");
        let copied = copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dst.join("a.txt")).unwrap(), b"a");
        assert_eq!(fs::read(dst.join("sub").join("b.txt")).unwrap(), b"b");
        assert!(dst.join("sub").is_dir());
    }

    #[test]
    fn copies_empty_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("empty").join("deeper")).unwrap();

        let dst = tmp.path().join("dst");
        assert_eq!(copy_dir_recursive(&src, &dst).unwrap(), 0);
        assert!(dst.join("empty").join("deeper").is_dir());
    }

    #[test]
    fn overwrites_and_keeps_unrelated_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("a.txt"), b"new");

        let dst = tmp.path().join("dst");
        write(&dst.join("a.txt"), b"old and longer");
        write(&dst.join("keep.txt"), b"keep");

        copy_dir_recursive(&src, &dst).unwrap();
        assert_eq!(fs::read(dst.join("a.txt")).unwrap(), b"new");
        assert_eq!(fs::read(dst.join("keep.txt")).unwrap(), b"keep");
    }

    #[test]
    fn missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_dir_recursive(&tmp.path().join("nope"), &tmp.path().join("dst")).unwrap_err();
        assert!(matches!(err, FileOpsError::NotFound(_)));
        assert!(!tmp.path().join("dst").exists());
    }
}
