//! LED registry discovery

use crate::PulseError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names of all LED entries under `root`, sorted, hidden entries excluded
pub fn list_leds(root: &Path) -> Result<Vec<String>, PulseError> {
    let entries = std::fs::read_dir(root).map_err(|e| PulseError::io(root, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PulseError::io(root, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Path of the first entry (in sorted order) whose name contains `target`
pub fn find_led(root: &Path, target: &str) -> Result<PathBuf, PulseError> {
    let found = list_leds(root)?
        .into_iter()
        .find(|name| name.contains(target));

    match found {
        Some(name) => {
            debug!("LED '{}' matched entry {}", target, name);
            Ok(root.join(name))
        }
        None => Err(PulseError::LedNotFound {
            target: target.to_string(),
            root: root.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fake_led, scratch_registry};

    #[test]
    fn test_list_sorted_without_hidden() {
        let root = scratch_registry("list");
        fake_led(&root, "phy0-led", "1");
        fake_led(&root, "input3::capslock", "1");
        fake_led(&root, ".staging", "1");

        let names = list_leds(&root).unwrap();
        assert_eq!(names, vec!["input3::capslock", "phy0-led"]);
    }

    #[test]
    fn test_find_substring() {
        let root = scratch_registry("find");
        fake_led(&root, "input3::capslock", "1");
        fake_led(&root, "input3::numlock", "1");

        let path = find_led(&root, "caps").unwrap();
        assert_eq!(path, root.join("input3::capslock"));

        // Both match, sorted order wins
        let path = find_led(&root, "input3").unwrap();
        assert_eq!(path, root.join("input3::capslock"));
    }

    #[test]
    fn test_not_found() {
        let root = scratch_registry("missing");
        fake_led(&root, "input3::numlock", "1");

        let err = find_led(&root, "scrolllock").unwrap_err();
        assert!(matches!(err, PulseError::LedNotFound { ref target, .. } if target == "scrolllock"));
    }

    #[test]
    fn test_missing_registry() {
        let root = scratch_registry("gone").join("does-not-exist");
        let err = list_leds(&root).unwrap_err();
        assert!(matches!(err, PulseError::Io { ref path, .. } if *path == root));
    }
}
