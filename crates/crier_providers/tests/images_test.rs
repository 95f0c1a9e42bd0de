//! Tests for the directory image provider.

use crier_core::{MediaRef, Topic};
use crier_interface::ImageProvider;
use crier_providers::DirectoryImageProvider;
use std::fs::File;

#[tokio::test]
async fn test_finds_image_matching_topic() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("devops_banner.png")).unwrap();
    File::create(dir.path().join("unrelated.png")).unwrap();

    let provider = DirectoryImageProvider::new(dir.path());
    let media = provider.find(&Topic::new("DevOps")).await.unwrap();

    match media {
        Some(MediaRef::Path(path)) => {
            assert!(path.file_name().unwrap().to_string_lossy().contains("devops"));
        }
        other => panic!("expected a local path, got {other:?}"),
    }
}

#[tokio::test]
async fn test_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("KUBERNETES-diagram.jpg")).unwrap();

    let provider = DirectoryImageProvider::new(dir.path());
    let media = provider.find(&Topic::new("kubernetes")).await.unwrap();

    assert!(media.is_some());
}

#[tokio::test]
async fn test_no_match_is_none() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("devops_banner.png")).unwrap();

    let provider = DirectoryImageProvider::new(dir.path());
    let media = provider.find(&Topic::new("Quantum Computing")).await.unwrap();

    assert!(media.is_none());
}

#[tokio::test]
async fn test_missing_directory_is_none() {
    let provider = DirectoryImageProvider::new("does/not/exist");
    let media = provider.find(&Topic::new("DevOps")).await.unwrap();

    assert!(media.is_none());
}

#[tokio::test]
async fn test_directories_are_not_matched() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("devops_folder")).unwrap();

    let provider = DirectoryImageProvider::new(dir.path());
    let media = provider.find(&Topic::new("DevOps")).await.unwrap();

    assert!(media.is_none());
}
