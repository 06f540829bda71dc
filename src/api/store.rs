//! The main entry point for reading and changing the catalog.

use crate::core::storage::{load_catalog, save_catalog, LoadOutcome, Video};
use crate::core::utils::parse_position;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{CatalogError, StorageError};

/// Outcome of a successful mutation.
///
/// The in-memory catalog has already changed. `persisted` reports whether the
/// file caught up; on failure the two stay out of sync until the next save.
#[derive(Debug)]
#[must_use]
pub struct Applied<T> {
    pub value: T,
    pub persisted: Result<(), StorageError>,
}

/// A 1-based view of the catalog for display.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    Rows(Vec<Row<'a>>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Row<'a> {
    pub position: usize,
    pub name: &'a str,
    pub duration: &'a str,
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Title: {:<50} | Duration: {}",
            self.position, self.name, self.duration
        )
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Empty => write!(f, "No videos found. Add some videos to get started!"),
            Listing::Rows(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", row)?;
                }
                Ok(())
            }
        }
    }
}

/// Owns the in-memory catalog and the file it is persisted to.
///
/// Created once by the driver and passed by `&mut` to every operation.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    videos: Vec<Video>,
}

impl CatalogStore {
    /// Loads the catalog at `path`.
    ///
    /// Returns the store together with any warning raised while reading. The
    /// store is always usable; a corrupted file simply starts it empty.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<StorageError>) {
        let path = path.into();
        let LoadOutcome { videos, warning } = load_catalog(&path);
        (Self { path, videos }, warning)
    }

    /// Re-reads the file, replacing the in-memory catalog.
    pub fn reload(&mut self) -> Option<StorageError> {
        let LoadOutcome { videos, warning } = load_catalog(&self.path);
        self.videos = videos;
        warning
    }

    /// Writes the whole catalog to disk.
    pub fn save(&self) -> Result<(), StorageError> {
        save_catalog(&self.path, &self.videos)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Looks up a video by its 1-based position.
    pub fn get(&self, position: usize) -> Option<&Video> {
        position.checked_sub(1).and_then(|i| self.videos.get(i))
    }

    pub fn list(&self) -> Listing<'_> {
        if self.videos.is_empty() {
            return Listing::Empty;
        }
        Listing::Rows(
            self.videos
                .iter()
                .enumerate()
                .map(|(i, v)| Row {
                    position: i + 1,
                    name: &v.name,
                    duration: &v.duration,
                })
                .collect(),
        )
    }

    /// Appends a new video and saves.
    pub fn add(&mut self, name: &str, duration: &str) -> Result<Applied<()>, CatalogError> {
        let video = Video::new(name, duration)?;
        self.videos.push(video);
        Ok(self.persist(()))
    }

    /// Replaces the non-empty fields of the video at `index` and saves.
    ///
    /// Empty replacements keep the current value, so passing neither still
    /// rewrites the file with unchanged content. Returns the 1-based position.
    pub fn update(
        &mut self,
        index: &str,
        new_name: Option<&str>,
        new_duration: Option<&str>,
    ) -> Result<Applied<usize>, CatalogError> {
        let i = self.check_position(index)? - 1;
        let video = &mut self.videos[i];
        if let Some(name) = non_empty(new_name) {
            video.name = name.to_string();
        }
        if let Some(duration) = non_empty(new_duration) {
            video.duration = duration.to_string();
        }
        Ok(self.persist(i + 1))
    }

    /// Removes the video at `index`, shifting later positions down, and saves.
    /// Returns the removed title.
    pub fn delete(&mut self, index: &str) -> Result<Applied<String>, CatalogError> {
        let i = self.check_position(index)? - 1;
        let removed = self.videos.remove(i);
        Ok(self.persist(removed.name))
    }

    /// Validates a user-typed position against the current catalog and returns it.
    pub fn check_position(&self, raw: &str) -> Result<usize, CatalogError> {
        parse_position(raw, self.videos.len())
            .map(|i| i + 1)
            .ok_or_else(|| CatalogError::Index {
                raw: raw.trim().to_string(),
                len: self.videos.len(),
            })
    }

    fn persist<T>(&self, value: T) -> Applied<T> {
        let persisted = self.save();
        if let Err(e) = &persisted {
            debug!(error = %e, "catalog changed in memory but was not saved");
        }
        Applied { value, persisted }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
