//! Shared test helpers for integration tests.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use imagehub::AppContext;
use imagehub_auth::SessionHandle;
use imagehub_core::config::AppConfig;

/// Test application context backed by a temporary storage directory.
pub struct TestApp {
    /// The wired application.
    pub ctx: AppContext,
    /// Owns the storage directory for the lifetime of the test.
    _storage_dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a new test application.
    pub fn new() -> Self {
        let storage_dir = tempfile::tempdir().expect("Failed to create temp storage dir");

        let mut config = AppConfig::default();
        config.storage.user_base_dir = storage_dir.path().to_string_lossy().into_owned();

        Self {
            ctx: AppContext::new(config),
            _storage_dir: storage_dir,
        }
    }

    /// Register a user and log them into a fresh session.
    pub async fn login_user(&self, username: &str, password: &str) -> SessionHandle {
        let registered = self
            .ctx
            .accounts
            .register(username, password)
            .await
            .expect("registration failed");
        assert!(registered.success, "{}", registered.message);

        let session = self.ctx.new_session();
        let logged_in = self
            .ctx
            .accounts
            .login(&session, username, password)
            .await
            .expect("login failed");
        assert!(logged_in.success, "{}", logged_in.message);
        session
    }
}

/// A small solid-color PNG as a header-tagged base64 upload payload.
pub fn encoded_png(shade: u8) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png_bytes(shade)))
}

/// Raw PNG bytes for a small solid-color image.
pub fn png_bytes(shade: u8) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([shade, shade, shade]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
