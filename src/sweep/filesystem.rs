use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SweepError;

/// Forcefully remove a file, symlink or directory tree.
///
/// A path that does not exist is not an error. Symlinks are unlinked, never
/// followed.
pub(crate) fn remove_path(path: &Path) -> Result<(), SweepError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(()),
        Err(error) => return Err(error.into()),
    };

    let file_type = metadata.file_type();
    let result = if file_type.is_symlink() {
        // Directory symlinks on Windows need remove_dir.
        fs::remove_file(path).or_else(|_| fs::remove_dir(path))
    } else if file_type.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(error) if error.kind() != ErrorKind::NotFound => Err(error.into()),
        _ => Ok(()),
    }
}

/// Whether `dir` holds no entries other than hidden (dot-prefixed) ones.
///
/// Absent or unreadable directories count as not empty.
pub(crate) fn is_visibly_empty(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    for entry in entries {
        let Ok(entry) = entry else {
            return false;
        };
        if !entry.file_name().to_string_lossy().starts_with('.') {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn removing_a_missing_path_succeeds() {
        let temp = tempdir().unwrap();
        remove_path(&temp.path().join("never-existed")).expect("missing path is fine");
    }

    #[test]
    fn removes_directory_trees_and_files() {
        let temp = tempdir().unwrap();
        let tree = temp.path().join("tree/inner");
        fs::create_dir_all(&tree).unwrap();
        fs::write(tree.join("file.txt"), "x").unwrap();
        let file = temp.path().join("lone.txt");
        fs::write(&file, "y").unwrap();

        remove_path(&temp.path().join("tree")).unwrap();
        remove_path(&file).unwrap();

        assert!(!temp.path().join("tree").exists());
        assert!(!file.exists());
    }

    #[test]
    #[cfg(unix)]
    fn symlinked_skill_is_unlinked_without_touching_target() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("canonical/greet");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("SKILL.md"), "x").unwrap();
        let link = temp.path().join("greet-link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        remove_path(&link).unwrap();

        assert!(fs::symlink_metadata(&link).is_err());
        assert!(target.join("SKILL.md").exists());
    }

    #[test]
    fn hidden_entries_do_not_count_towards_emptiness() {
        let temp = tempdir().unwrap();
        assert!(is_visibly_empty(temp.path()));

        fs::write(temp.path().join(".DS_Store"), "").unwrap();
        fs::create_dir(temp.path().join(".cache")).unwrap();
        assert!(is_visibly_empty(temp.path()));

        fs::create_dir(temp.path().join("skill")).unwrap();
        assert!(!is_visibly_empty(temp.path()));
    }

    #[test]
    fn missing_or_non_directory_paths_are_not_empty() {
        let temp = tempdir().unwrap();
        assert!(!is_visibly_empty(&temp.path().join("absent")));

        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(!is_visibly_empty(&file));
    }

    #[test]
    fn emptiness_check_is_idempotent() {
        let temp = tempdir().unwrap();
        let first = is_visibly_empty(temp.path());
        let second = is_visibly_empty(temp.path());
        assert_eq!(first, second);
    }
}
