//! Integration tests for file-backed persistence

use bookmark_board::{
    column::AddColumn,
    persist::{FileSnapshotStore, Persistence, SnapshotStore},
    row::AddRow,
    BoardContext, BoardError, BoardOperationProcessor, BoardSnapshot, Image, OperationProcessor,
};
use tempfile::TempDir;

fn populated() -> BoardContext {
    let mut ctx = BoardContext::new();
    let processor = BoardOperationProcessor::new();
    let column = processor.process(&AddColumn::new("Icons"), &mut ctx).unwrap();
    let icon = Image::new("image/png", vec![0x89, b'P', b'N', b'G']);
    processor
        .process(
            &AddRow::new(column["id"].as_str().unwrap(), "Rust", "https://rust-lang.org")
                .with_image(icon),
            &mut ctx,
        )
        .unwrap();
    ctx
}

#[tokio::test]
async fn test_round_trip_through_files() {
    let temp = TempDir::new().unwrap();
    let persistence = Persistence::new(FileSnapshotStore::new(temp.path().join(".bookmarks")));
    let source = populated();

    persistence.save(&source).await.unwrap();
    assert!(temp.path().join(".bookmarks").join("store.json").exists());

    let mut fresh = BoardContext::new();
    assert!(persistence.rehydrate(&mut fresh).await.unwrap());

    assert_eq!(fresh.snapshot(), source.snapshot());
    assert_eq!(fresh.state().rows()[0].image.as_ref().unwrap().len(), 4);
}

#[tokio::test]
async fn test_snapshot_file_format() {
    let temp = TempDir::new().unwrap();
    let store = FileSnapshotStore::new(temp.path());
    let persistence = Persistence::with_key(store.clone(), "board");

    persistence.save(&populated()).await.unwrap();

    let raw = std::fs::read_to_string(store.path_for("board").unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["columns"][0]["title"], "Icons");
    assert_eq!(json["rows"][0]["columnId"], json["columns"][0]["id"]);
    assert_eq!(json["rows"][0]["image"]["contentType"], "image/png");
    assert_eq!(json["rows"][0]["image"]["data"], "iVBORw==");
}

#[tokio::test]
async fn test_last_writer_wins() {
    let temp = TempDir::new().unwrap();
    let first = Persistence::new(FileSnapshotStore::new(temp.path()));
    let second = first.clone();

    first.save(&populated()).await.unwrap();
    second.save(&BoardContext::new()).await.unwrap();

    let mut ctx = populated();
    assert!(first.rehydrate(&mut ctx).await.unwrap());
    assert_eq!(ctx.snapshot(), BoardSnapshot::default());
}

#[tokio::test]
async fn test_corrupt_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let store = FileSnapshotStore::new(temp.path());
    store.save("store", b"[1, 2, 3]").await.unwrap();

    let error = Persistence::new(store)
        .rehydrate(&mut BoardContext::new())
        .await
        .unwrap_err();

    assert!(matches!(error, BoardError::CorruptSnapshot { .. }));
}

#[tokio::test]
async fn test_background_save_reaches_disk() {
    let temp = TempDir::new().unwrap();
    let persistence = Persistence::new(FileSnapshotStore::new(temp.path()));
    let ctx = populated();

    persistence.save_in_background(&ctx).await.unwrap();

    let mut fresh = BoardContext::new();
    persistence.rehydrate(&mut fresh).await.unwrap();
    assert_eq!(fresh.state().columns()[0].title, "Icons");
}
