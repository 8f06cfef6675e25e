use reelsmith_core::{AssetReference, MediaType, SceneDescriptor, WorkflowResult};
use reelsmith_storage::{FileSystemStorage, InMemoryStorage, MediaMetadata, MediaStorage};
use reelsmith_workflow::BundleExporter;
use std::io::{Cursor, Read};
use std::sync::Arc;
use tempfile::TempDir;
use zip::ZipArchive;

fn entry_names(archive: &[u8]) -> anyhow::Result<Vec<String>> {
    let zip = ZipArchive::new(Cursor::new(archive))?;
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();
    Ok(names)
}

fn read_entry(archive: &[u8], name: &str) -> anyhow::Result<Vec<u8>> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;
    let mut file = zip.by_name(name)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

async fn store(storage: &dyn MediaStorage, media_type: MediaType, bytes: &[u8]) -> anyhow::Result<AssetReference> {
    let mime = match media_type {
        MediaType::Audio => "audio/mpeg",
        _ => "image/png",
    };
    Ok(storage.store(bytes, &MediaMetadata::new(media_type, mime)).await?)
}

#[tokio::test]
async fn test_full_bundle_layout() -> anyhow::Result<()> {
    let storage = Arc::new(InMemoryStorage::new());
    let result = WorkflowResult {
        script: Some("The narration.".to_string()),
        scene_prompts: vec![
            SceneDescriptor::new("Harbor", "Boats at dawn"),
            SceneDescriptor::new("Market", "Fish on ice"),
        ],
        image_refs: vec![
            store(storage.as_ref(), MediaType::Image, b"png-one").await?,
            store(storage.as_ref(), MediaType::Image, b"png-two").await?,
        ],
        audio_ref: Some(store(storage.as_ref(), MediaType::Audio, b"mp3").await?),
        video_ref: None,
    };

    let archive = BundleExporter::new(storage).export(&result).await?;

    assert_eq!(
        entry_names(&archive)?,
        vec![
            "audio.mp3",
            "scene-1.png",
            "scene-2.png",
            "scene-descriptions.txt",
            "script.txt",
        ]
    );
    assert_eq!(read_entry(&archive, "script.txt")?, b"The narration.");
    assert_eq!(read_entry(&archive, "scene-2.png")?, b"png-two");
    assert_eq!(read_entry(&archive, "audio.mp3")?, b"mp3");

    let descriptions = String::from_utf8(read_entry(&archive, "scene-descriptions.txt")?)?;
    let blocks: Vec<&str> = descriptions.trim_end().split("\n\n").collect();
    assert_eq!(blocks, vec!["Scene 1: Harbor\nBoats at dawn", "Scene 2: Market\nFish on ice"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_result_yields_empty_archive() -> anyhow::Result<()> {
    let exporter = BundleExporter::new(Arc::new(InMemoryStorage::new()));
    let archive = exporter.export(&WorkflowResult::default()).await?;
    assert!(entry_names(&archive)?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_partial_result_omits_missing_parts() -> anyhow::Result<()> {
    let result = WorkflowResult {
        script: Some("Only a script.".to_string()),
        scene_prompts: vec![SceneDescriptor::new("One", "first")],
        ..WorkflowResult::default()
    };
    let exporter = BundleExporter::new(Arc::new(InMemoryStorage::new()));
    let archive = exporter.export(&result).await?;

    assert_eq!(entry_names(&archive)?, vec!["scene-descriptions.txt", "script.txt"]);
    Ok(())
}

#[tokio::test]
async fn test_unfetchable_image_leaves_numbering_gap() -> anyhow::Result<()> {
    let storage = Arc::new(InMemoryStorage::new());
    let first = store(storage.as_ref(), MediaType::Image, b"first").await?;
    let second = store(storage.as_ref(), MediaType::Image, b"second").await?;
    let third = store(storage.as_ref(), MediaType::Image, b"third").await?;
    storage.delete(&second).await?;

    let result = WorkflowResult {
        image_refs: vec![first, second, third],
        ..WorkflowResult::default()
    };
    let archive = BundleExporter::new(storage).export(&result).await?;

    assert_eq!(entry_names(&archive)?, vec!["scene-1.png", "scene-3.png"]);
    Ok(())
}

#[tokio::test]
async fn test_export_to_file_from_filesystem_store() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = Arc::new(FileSystemStorage::new(temp_dir.path().join("media"))?);
    let result = WorkflowResult {
        script: Some("Saved to disk.".to_string()),
        audio_ref: Some(store(storage.as_ref(), MediaType::Audio, b"audio bytes").await?),
        ..WorkflowResult::default()
    };

    let path = temp_dir.path().join("bundle.zip");
    BundleExporter::new(storage).export_to_file(&result, &path).await?;

    let archive = std::fs::read(&path)?;
    assert_eq!(entry_names(&archive)?, vec!["audio.mp3", "script.txt"]);
    assert_eq!(read_entry(&archive, "audio.mp3")?, b"audio bytes");
    Ok(())
}
