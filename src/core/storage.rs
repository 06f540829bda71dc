use super::utils::ensure_parent_dir;
use crate::api::{CatalogError, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// A single catalog record.
///
/// Fields are trimmed and non-empty when built through [`Video::new`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Video {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Time")]
    pub duration: String,
}

impl Video {
    pub fn new(name: &str, duration: &str) -> Result<Self, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("name"));
        }
        let duration = duration.trim();
        if duration.is_empty() {
            return Err(CatalogError::Validation("duration"));
        }
        Ok(Self {
            name: name.to_string(),
            duration: duration.to_string(),
        })
    }
}

/// Result of reading the storage file. Loading never fails outright.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub videos: Vec<Video>,
    /// Set when the file existed but could not be used.
    pub warning: Option<StorageError>,
}

/// Read the catalog from `path`.
///
/// A missing file yields an empty catalog. An unreadable or malformed file
/// yields an empty catalog plus a warning.
pub fn load_catalog(path: &Path) -> LoadOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no video file yet, starting empty");
            return LoadOutcome::default();
        }
        Err(source) => {
            debug!(path = %path.display(), error = %source, "video file unreadable");
            return LoadOutcome {
                videos: Vec::new(),
                warning: Some(StorageError::Read {
                    path: path.to_path_buf(),
                    source,
                }),
            };
        }
    };

    match serde_json::from_slice::<Vec<Video>>(&bytes) {
        Ok(videos) => {
            debug!(path = %path.display(), count = videos.len(), "loaded videos");
            LoadOutcome {
                videos,
                warning: None,
            }
        }
        Err(source) => {
            debug!(path = %path.display(), error = %source, "video file corrupted");
            LoadOutcome {
                videos: Vec::new(),
                warning: Some(StorageError::Corrupted {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        }
    }
}

/// Overwrite `path` with the full catalog as indented JSON.
///
/// The data is written to a sibling temp file which then replaces the file
/// `path` resolves to. Symlinks are followed and an existing file keeps its
/// permissions.
pub fn save_catalog(path: &Path, videos: &[Video]) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(videos)?;
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = match fs::canonicalize(path) {
        Ok(real) => real,
        Err(e) if e.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_err(e)),
    };
    let existing = fs::metadata(&target).ok().map(|m| m.permissions());

    let dir = ensure_parent_dir(&target).map_err(write_err)?;
    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), count = videos.len(), "saved videos");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn video(name: &str, duration: &str) -> Video {
        Video::new(name, duration).unwrap()
    }

    #[test]
    fn new_trims_and_rejects_empty_fields() {
        let v = video("  Intro  ", " 1:00 ");
        assert_eq!(v.name, "Intro");
        assert_eq!(v.duration, "1:00");

        assert!(matches!(
            Video::new("   ", "1:00"),
            Err(CatalogError::Validation("name"))
        ));
        assert!(matches!(
            Video::new("Intro", ""),
            Err(CatalogError::Validation("duration"))
        ));
    }

    #[test]
    fn missing_file_loads_empty_without_warning() {
        let dir = TempDir::new().unwrap();
        let outcome = load_catalog(&dir.path().join("youtube.txt"));
        assert!(outcome.videos.is_empty());
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn corrupted_file_loads_empty_with_warning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");
        fs::write(&path, "not json").unwrap();

        let outcome = load_catalog(&path);
        assert!(outcome.videos.is_empty());
        assert!(matches!(
            outcome.warning,
            Some(StorageError::Corrupted { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");

        for body in [
            r#"{"Name": "A", "Time": "1:00"}"#,
            r#"[{"Name": "A"}]"#,
            r#"[{"Name": "A", "Time": "1:00", "Views": 3}]"#,
            r#"["A", "B"]"#,
            r#"[{"Name": "A", "Time": "1:0"#,
        ] {
            fs::write(&path, body).unwrap();
            let outcome = load_catalog(&path);
            assert!(outcome.videos.is_empty(), "{body}");
            assert!(
                matches!(outcome.warning, Some(StorageError::Corrupted { .. })),
                "{body}"
            );
        }
    }

    #[test]
    fn save_then_load_preserves_content_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");
        let videos = vec![video("B", "2:00"), video("A", "1:00"), video("C", "3:00")];

        save_catalog(&path, &videos).unwrap();
        let outcome = load_catalog(&path);
        assert!(outcome.warning.is_none());
        assert_eq!(outcome.videos, videos);
    }

    #[test]
    fn saved_file_is_indented_with_literal_unicode() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");
        save_catalog(&path, &[video("Café à Paris", "12:30")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"Name\": \"Café à Paris\",\n    \"Time\": \"12:30\"\n  }\n]"
        );
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");
        save_catalog(&path, &[video("A", "1:00"), video("B", "2:00")]).unwrap();
        save_catalog(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(load_catalog(&path).videos.is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("videos.json");
        save_catalog(&path, &[video("A", "1:00")]).unwrap();
        assert_eq!(load_catalog(&path).videos.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_catalog(&path, &[video("A", "1:00")]).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn save_writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("youtube.txt");
        fs::write(&real, "[]").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        save_catalog(&link, &[video("A", "1:00")]).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(load_catalog(&real).videos, [video("A", "1:00")]);
        assert_eq!(load_catalog(&link).videos, [video("A", "1:00")]);
    }

    #[test]
    fn directory_at_storage_path_is_a_read_warning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("youtube.txt");
        fs::create_dir(&path).unwrap();

        let outcome = load_catalog(&path);
        assert!(outcome.videos.is_empty());
        assert!(matches!(outcome.warning, Some(StorageError::Read { .. })));
    }

    #[test]
    fn save_into_a_file_as_directory_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = save_catalog(&blocker.join("youtube.txt"), &[]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
