use bytes::Bytes;
use media_upload_service::media::{ClassifiedFile, FileContent, IncomingFile, MediaCategory};
use media_upload_service::store::{
    ensure_exists, resolve_directory, BufferStore, DiskStore, MediaStore, Persistence,
};

fn buffered(name: &str, category: MediaCategory, data: &[u8]) -> ClassifiedFile {
    ClassifiedFile {
        file: IncomingFile {
            original_name: name.to_string(),
            mime_type: "application/octet-stream".to_string(),
            size: data.len() as u64,
            content: FileContent::Buffer(Bytes::copy_from_slice(data)),
        },
        category,
    }
}

#[tokio::test]
async fn test_disk_store_writes_under_category_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = DiskStore::new(dir.path()).unwrap();

    let record = store
        .store(buffered("photo.png", MediaCategory::Image, b"png-bytes"))
        .await
        .unwrap();

    assert_eq!(record.original_name, "photo.png");
    assert_eq!(record.category, MediaCategory::Image);
    assert_eq!(record.size, 9);
    assert!(record.filename.starts_with("photo_"));
    assert!(record.filename.ends_with(".png"));
    assert_eq!(
        record.url,
        format!("/uploads/images/{}", record.filename)
    );

    assert!(record.is_persisted());
    let path = record.path().expect("disk mode records carry a path");
    assert!(path.is_absolute());
    assert!(path.ends_with(format!("images/{}", record.filename)));
    assert_eq!(std::fs::read(path).unwrap(), b"png-bytes");
}

#[tokio::test]
async fn test_disk_store_moves_staged_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = DiskStore::new(dir.path().join("uploads")).unwrap();

    let staged = dir.path().join("staged.tmp");
    std::fs::write(&staged, b"wav-bytes").unwrap();

    let record = store
        .store(ClassifiedFile {
            file: IncomingFile {
                original_name: "song.wav".to_string(),
                mime_type: "audio/wav".to_string(),
                size: 9,
                content: FileContent::Staged(staged.clone()),
            },
            category: MediaCategory::Audio,
        })
        .await
        .unwrap();

    // Staged source is gone, destination holds the bytes
    assert!(!staged.exists());
    assert_eq!(std::fs::read(record.path().unwrap()).unwrap(), b"wav-bytes");
    assert!(record.url.starts_with("/uploads/audio/"));
}

#[tokio::test]
async fn test_disk_store_never_collides_on_destination() {
    let dir = tempfile::tempdir().unwrap();
    let store = DiskStore::new(dir.path()).unwrap();

    let first = store
        .store(buffered("clip.mp4", MediaCategory::Video, b"first"))
        .await
        .unwrap();
    let second = store
        .store(buffered("clip.mp4", MediaCategory::Video, b"second"))
        .await
        .unwrap();

    assert_ne!(first.filename, second.filename);
    assert_eq!(std::fs::read(first.path().unwrap()).unwrap(), b"first");
    assert_eq!(std::fs::read(second.path().unwrap()).unwrap(), b"second");
}

#[tokio::test]
async fn test_buffer_store_defers_persistence() {
    let store = BufferStore::new();

    let record = store
        .store(buffered("photo.jpg", MediaCategory::Image, b"jpeg-bytes"))
        .await
        .unwrap();

    assert!(!record.is_persisted());
    assert!(record.path().is_none());
    assert!(record.url.starts_with("/uploads/images/photo_"));
    match &record.persistence {
        Persistence::Deferred(bytes) => assert_eq!(bytes.as_ref(), b"jpeg-bytes"),
        Persistence::Disk(_) => panic!("buffer store must not touch disk"),
    }
}

#[tokio::test]
async fn test_store_all_preserves_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = DiskStore::new(dir.path()).unwrap();

    let records = store
        .store_all(vec![
            buffered("a.png", MediaCategory::Image, b"a"),
            buffered("b.mp3", MediaCategory::Audio, b"b"),
            buffered("c.mkv", MediaCategory::Video, b"c"),
        ])
        .await
        .unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.original_name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.mp3", "c.mkv"]);
}

#[tokio::test]
async fn test_store_all_empty_batch() {
    let store = BufferStore::new();
    let records = store.store_all(Vec::new()).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_ensure_exists_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("images");

    ensure_exists(&target, true).await.unwrap();
    ensure_exists(&target, true).await.unwrap();

    assert!(target.is_dir());
}

#[tokio::test]
async fn test_ensure_exists_read_only_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("never-created");

    ensure_exists(&target, false).await.unwrap();

    assert!(!target.exists());
}

#[test]
fn test_resolve_directory_per_category() {
    let base = std::path::Path::new("/srv/uploads");
    assert_eq!(
        resolve_directory(base, MediaCategory::Image),
        base.join("images")
    );
    assert_eq!(
        resolve_directory(base, MediaCategory::Audio),
        base.join("audio")
    );
    assert_eq!(
        resolve_directory(base, MediaCategory::Video),
        base.join("video")
    );
}
