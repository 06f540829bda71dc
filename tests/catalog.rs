use std::fs;
use tempfile::TempDir;
use video_catalog::{CatalogError, CatalogStore, StorageError, Video};

#[test]
fn catalog_survives_between_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("youtube.txt");

    {
        let (mut store, warning) = CatalogStore::open(&path);
        assert!(warning.is_none());
        store.add("Rust in 100 Seconds", "2:20").unwrap().persisted.unwrap();
        store.add("Ownership explained", "14:05").unwrap().persisted.unwrap();
        store.add("Async deep dive", "1:02:33").unwrap().persisted.unwrap();
        store
            .update("2", None, Some("15:00"))
            .unwrap()
            .persisted
            .unwrap();
        assert_eq!(store.delete("1").unwrap().value, "Rust in 100 Seconds");
    }

    let (store, warning) = CatalogStore::open(&path);
    assert!(warning.is_none());
    assert_eq!(
        store.videos(),
        [
            Video::new("Ownership explained", "15:00").unwrap(),
            Video::new("Async deep dive", "1:02:33").unwrap(),
        ]
    );
}

#[test]
fn corrupted_file_is_replaced_on_first_change() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("youtube.txt");
    fs::write(&path, "{ truncated").unwrap();

    let (mut store, warning) = CatalogStore::open(&path);
    assert!(matches!(warning, Some(StorageError::Corrupted { .. })));
    assert!(matches!(
        store.delete("1"),
        Err(CatalogError::Index { len: 0, .. })
    ));

    store.add("Fresh start", "0:30").unwrap().persisted.unwrap();
    let (reopened, warning) = CatalogStore::open(&path);
    assert!(warning.is_none());
    assert_eq!(reopened.len(), 1);
}

#[test]
fn reads_files_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("youtube.txt");
    fs::write(
        &path,
        r#"[{"Name": "Vidéo d'été", "Time": "10:30"}, {"Time": "3:00", "Name": "B"}]"#,
    )
    .unwrap();

    let (store, warning) = CatalogStore::open(&path);
    assert!(warning.is_none());
    assert_eq!(store.get(1).map(|v| v.name.as_str()), Some("Vidéo d'été"));
    assert_eq!(store.get(2).map(|v| v.duration.as_str()), Some("3:00"));
    assert!(store.get(0).is_none());
    assert!(store.get(3).is_none());
}
