//! Integration tests for the batch upload pipeline.

mod common;

use common::{TestApp, encoded_png};
use imagehub_core::types::BatchKind;

#[tokio::test]
async fn empty_batch() {
    let app = TestApp::new();
    let session = app.login_user("alice", "pw123").await;

    let result = app.ctx.uploads.submit_batch(&session, &[], &[]).await;
    assert_eq!(result.kind, BatchKind::Empty);
    assert!(result.saved_files.is_empty());
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn all_valid_files_are_saved() {
    let app = TestApp::new();
    let session = app.login_user("alice", "pw123").await;

    let contents = vec![encoded_png(10), encoded_png(20), encoded_png(30)];
    let filenames = vec![
        "one.png".to_string(),
        "two.tif".to_string(),
        "three.jpeg".to_string(),
    ];

    let result = app
        .ctx
        .uploads
        .submit_batch(&session, &contents, &filenames)
        .await;

    assert_eq!(result.kind, BatchKind::Success);
    assert_eq!(result.saved_files, filenames);
    assert!(result.errors.is_empty());
}

#[tokio::test]
async fn bad_extension_yields_partial_success() {
    let app = TestApp::new();
    let session = app.login_user("alice", "pw123").await;

    let result = app
        .ctx
        .uploads
        .submit_batch(
            &session,
            &[encoded_png(1), encoded_png(2)],
            &["good.png".to_string(), "clip.gif".to_string()],
        )
        .await;

    assert_eq!(result.kind, BatchKind::PartialSuccess);
    assert_eq!(result.saved_files, vec!["good.png"]);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("clip.gif"));
    assert!(result.errors[0].contains("Unsupported file type"));
}

#[tokio::test]
async fn all_invalid_files_yield_error() {
    let app = TestApp::new();
    let session = app.login_user("alice", "pw123").await;

    let result = app
        .ctx
        .uploads
        .submit_batch(
            &session,
            &["no-comma".to_string(), encoded_png(1)],
            &["a.png".to_string(), "b.bmp".to_string()],
        )
        .await;

    assert_eq!(result.kind, BatchKind::Error);
    assert!(result.saved_files.is_empty());
    assert_eq!(result.errors.len(), 2);
}

#[tokio::test]
async fn unauthenticated_upload_is_rejected_once_per_batch() {
    let app = TestApp::new();
    let session = app.ctx.new_session();

    let result = app
        .ctx
        .uploads
        .submit_batch(&session, &[encoded_png(1)], &["a.png".to_string()])
        .await;

    assert_eq!(result.kind, BatchKind::Error);
    assert_eq!(result.message, "You must be logged in to upload images.");
}

#[tokio::test]
async fn uploads_from_two_users_do_not_mix() {
    let app = TestApp::new();
    let alice = app.login_user("alice", "pw123").await;
    let bob = app.login_user("bob", "pw456").await;

    app.ctx
        .uploads
        .submit_batch(&alice, &[encoded_png(1)], &["a.png".to_string()])
        .await;
    app.ctx
        .uploads
        .submit_batch(&bob, &[encoded_png(2)], &["b.png".to_string()])
        .await;

    assert_eq!(app.ctx.storage.list_images("alice").await.unwrap(), vec!["a.png"]);
    assert_eq!(app.ctx.storage.list_images("bob").await.unwrap(), vec!["b.png"]);
}
